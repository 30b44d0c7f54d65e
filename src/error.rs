use thiserror::Error;

/// Errors surfaced by the sharing, interpolation and recovery operations.
///
/// Commitment verification is deliberately absent here: a failed check is an
/// expected business outcome and is reported as `false`, never as an error.
#[derive(Debug, Error)]
pub enum VsssError {
    #[error("invalid input length: {0}")]
    InvalidInputLength(String),
    #[error("insufficient shares: got {got}, need {need}")]
    InsufficientShares { got: usize, need: usize },
    #[error("arithmetic error: {0}")]
    Arithmetic(String),
    #[error("mnemonic decode error: {0}")]
    Decode(String),
    #[error("invalid share index: {0}")]
    InvalidShareIndex(String),
}
