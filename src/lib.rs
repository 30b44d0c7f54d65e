pub mod error;
pub mod feldman;
pub mod field;
pub mod group;
pub mod lagrange;
pub mod mnemonic;
pub mod polynomial;
pub mod recovery;
pub mod scheme;

pub use error::*;
pub use feldman::*;
pub use field::*;
pub use group::*;
pub use lagrange::*;
pub use mnemonic::*;
pub use polynomial::*;
pub use recovery::*;
pub use scheme::*;
