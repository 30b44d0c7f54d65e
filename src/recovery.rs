use num_bigint::BigUint;

use crate::error::VsssError;
use crate::mnemonic;
use crate::polynomial::Share;
use crate::scheme::ShareScheme;

/// Recover a private key from a quorum of mnemonic-encoded shares.
///
/// Each phrase is decoded to a share value and paired with its index, the
/// secret is interpolated at x = 0 over the secp256k1 scalar field, and the
/// result is returned as a zero-padded 64-character lowercase hex string.
///
/// `indices` and `phrases` must have equal length, and at least `threshold`
/// of them must be supplied; the first `threshold` decoded shares are used.
pub fn recover_key_from_shares<S: AsRef<str>>(
    threshold: usize,
    indices: &[BigUint],
    phrases: &[S],
) -> Result<String, VsssError> {
    if indices.len() != phrases.len() {
        return Err(VsssError::InvalidInputLength(format!(
            "{} share indices but {} mnemonic phrases",
            indices.len(),
            phrases.len()
        )));
    }
    if phrases.len() < threshold {
        return Err(VsssError::InsufficientShares {
            got: phrases.len(),
            need: threshold,
        });
    }
    let mut shares = Vec::with_capacity(phrases.len());
    for (index, phrase) in indices.iter().zip(phrases) {
        let value = mnemonic::decode_share_value(phrase.as_ref())?;
        shares.push(Share {
            index: index.clone(),
            value,
        });
    }
    let secret = ShareScheme::secp256k1().recover_secret(threshold, &shares)?;
    Ok(format!("{:064x}", secret))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_lengths_are_rejected() {
        let indices = vec![BigUint::from(1u32), BigUint::from(2u32)];
        let phrases = vec!["abandon"];
        let err = recover_key_from_shares(2, &indices, &phrases).unwrap_err();
        assert!(matches!(err, VsssError::InvalidInputLength(_)));
    }

    #[test]
    fn quorum_is_enforced_before_decoding() {
        let indices = vec![BigUint::from(1u32)];
        // an invalid phrase must not be touched when the quorum check fails
        let phrases = vec!["not a mnemonic"];
        let err = recover_key_from_shares(2, &indices, &phrases).unwrap_err();
        assert!(matches!(
            err,
            VsssError::InsufficientShares { got: 1, need: 2 }
        ));
    }

    #[test]
    fn undecodable_phrases_surface_as_decode_errors() {
        let indices = vec![BigUint::from(1u32), BigUint::from(2u32)];
        let phrases = vec!["not a mnemonic", "also not one"];
        let err = recover_key_from_shares(2, &indices, &phrases).unwrap_err();
        assert!(matches!(err, VsssError::Decode(_)));
    }
}
