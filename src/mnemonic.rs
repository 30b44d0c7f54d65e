use bip39::{Language, Mnemonic};
use num_bigint::BigUint;

use crate::error::VsssError;

/// Width of an encoded share value: 32 bytes of entropy, i.e. a 24-word
/// BIP-39 phrase.
pub const SHARE_BYTES: usize = 32;
pub const PHRASE_WORDS: usize = 24;

/// Encode a field element as a 24-word English mnemonic phrase.
///
/// The value is serialized big-endian into a fixed 32-byte buffer
/// (left-zero-padded); values wider than 32 bytes cannot be transcribed and
/// are rejected.
pub fn encode_share_value(value: &BigUint) -> Result<String, VsssError> {
    let bytes = value.to_bytes_be();
    if bytes.len() > SHARE_BYTES {
        return Err(VsssError::InvalidInputLength(format!(
            "share value occupies {} bytes, at most {} are encodable",
            bytes.len(),
            SHARE_BYTES
        )));
    }
    let mut buf = [0u8; SHARE_BYTES];
    buf[SHARE_BYTES - bytes.len()..].copy_from_slice(&bytes);
    let mnemonic = Mnemonic::from_entropy_in(Language::English, &buf)
        .map_err(|e| VsssError::Decode(e.to_string()))?;
    Ok(mnemonic.to_string())
}

/// Decode a 24-word phrase back to the field element it encodes.
///
/// Wordlist membership and the checksum are validated; a phrase of any other
/// word count is rejected even when it is a valid shorter mnemonic.
pub fn decode_share_value(phrase: &str) -> Result<BigUint, VsssError> {
    let mnemonic = Mnemonic::parse_in_normalized(Language::English, phrase.trim())
        .map_err(|e| VsssError::Decode(e.to_string()))?;
    if mnemonic.word_count() != PHRASE_WORDS {
        return Err(VsssError::Decode(format!(
            "expected a {}-word phrase, got {} words",
            PHRASE_WORDS,
            mnemonic.word_count()
        )));
    }
    Ok(BigUint::from_bytes_be(&mnemonic.to_entropy()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;
    use rand::rngs::OsRng;

    use crate::field;
    use crate::group::{Group, Secp256k1Group};

    #[test]
    fn round_trip_random_values() {
        let order = Secp256k1Group.order();
        for _ in 0..8 {
            let value = field::random_below(&order, &mut OsRng);
            let phrase = encode_share_value(&value).unwrap();
            assert_eq!(phrase.split_whitespace().count(), PHRASE_WORDS);
            assert_eq!(decode_share_value(&phrase).unwrap(), value);
        }
    }

    #[test]
    fn zero_encodes_to_the_known_vector() {
        let phrase = encode_share_value(&BigUint::zero()).unwrap();
        let mut expected = vec!["abandon"; 23];
        expected.push("art");
        assert_eq!(phrase, expected.join(" "));
        assert_eq!(decode_share_value(&phrase).unwrap(), BigUint::zero());
    }

    #[test]
    fn short_phrases_are_rejected() {
        // a valid 12-word mnemonic, but not a share encoding
        let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
        assert!(matches!(
            decode_share_value(phrase),
            Err(VsssError::Decode(_))
        ));
    }

    #[test]
    fn unknown_words_are_rejected() {
        let mut words = vec!["abandon"; 23];
        words.push("zzzzzz");
        assert!(matches!(
            decode_share_value(&words.join(" ")),
            Err(VsssError::Decode(_))
        ));
    }

    #[test]
    fn bad_checksum_is_rejected() {
        // all-"abandon" has checksum word "art", so 24 x "abandon" cannot pass
        let phrase = vec!["abandon"; 24].join(" ");
        assert!(matches!(
            decode_share_value(&phrase),
            Err(VsssError::Decode(_))
        ));
    }

    #[test]
    fn oversized_values_are_rejected() {
        let too_wide = BigUint::from(1u32) << 256;
        assert!(matches!(
            encode_share_value(&too_wide),
            Err(VsssError::InvalidInputLength(_))
        ));
    }
}
