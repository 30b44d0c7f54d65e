use num_bigint::{BigInt, BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{CryptoRng, Rng};

use crate::error::VsssError;

/// Modular helpers over `BigUint`. Every function returns the canonical
/// representative in `[0, modulus)`; operands may be any non-negative value.

pub fn mod_add(lhs: &BigUint, rhs: &BigUint, modulus: &BigUint) -> BigUint {
    (lhs + rhs) % modulus
}

/// `lhs - rhs mod modulus` without underflow: both operands are reduced first,
/// then lifted by the modulus before subtracting.
pub fn mod_sub(lhs: &BigUint, rhs: &BigUint, modulus: &BigUint) -> BigUint {
    let lhs = lhs % modulus;
    let rhs = rhs % modulus;
    (modulus + lhs - rhs) % modulus
}

pub fn mod_mul(lhs: &BigUint, rhs: &BigUint, modulus: &BigUint) -> BigUint {
    (lhs * rhs) % modulus
}

/// Multiplicative inverse via the extended Euclidean algorithm.
///
/// Fails with `Arithmetic` when the value is zero mod the modulus or shares a
/// factor with it (for a prime modulus the latter cannot happen).
pub fn mod_inv(value: &BigUint, modulus: &BigUint) -> Result<BigUint, VsssError> {
    let value = value % modulus;
    if value.is_zero() {
        return Err(VsssError::Arithmetic(
            "zero has no modular inverse".to_string(),
        ));
    }
    let a = BigInt::from(value);
    let m = BigInt::from(modulus.clone());
    let ext = a.extended_gcd(&m);
    if !ext.gcd.is_one() {
        return Err(VsssError::Arithmetic(format!(
            "{} is not invertible modulo {}",
            a, m
        )));
    }
    Ok(ext.x.mod_floor(&m).magnitude().clone())
}

/// Draw a uniform field element in `[0, modulus)` from a CSPRNG.
pub fn random_below<R: Rng + CryptoRng>(modulus: &BigUint, rng: &mut R) -> BigUint {
    rng.gen_biguint_below(modulus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    fn p() -> BigUint {
        BigUint::from(65537u32)
    }

    #[test]
    fn sub_wraps_below_zero() {
        let p = p();
        let two = BigUint::from(2u32);
        let five = BigUint::from(5u32);
        assert_eq!(mod_sub(&two, &five, &p), &p - BigUint::from(3u32));
    }

    #[test]
    fn inverse_round_trip() {
        let p = p();
        let a = BigUint::from(1234u32);
        let inv = mod_inv(&a, &p).unwrap();
        assert_eq!(mod_mul(&a, &inv, &p), BigUint::from(1u32));
    }

    #[test]
    fn zero_is_not_invertible() {
        let p = p();
        assert!(matches!(
            mod_inv(&BigUint::zero(), &p),
            Err(VsssError::Arithmetic(_))
        ));
        // multiples of the modulus reduce to zero as well
        assert!(mod_inv(&(&p * BigUint::from(3u32)), &p).is_err());
    }

    #[test]
    fn random_is_below_modulus() {
        let p = p();
        for _ in 0..32 {
            assert!(random_below(&p, &mut OsRng) < p);
        }
    }
}
