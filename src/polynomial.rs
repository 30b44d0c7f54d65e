use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

use crate::error::VsssError;
use crate::field;
use crate::group::Group;

/// One share of a secret: the sharing polynomial evaluated at `index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    pub index: BigUint,
    pub value: BigUint,
}

/// A polynomial over the prime field `Z_modulus`.
///
/// f(x) = a0 + a1*x + a2*x^2 + ... + a_{t-1}*x^{t-1}
///
/// Coefficients are stored lowest-degree first; `a0` is the shared secret and
/// the coefficient count equals the reconstruction threshold. A polynomial is
/// built once per sharing, consumed to produce shares and commitments, and
/// dropped; it must not be reused to share a different secret.
#[derive(Debug, Clone)]
pub struct Polynomial {
    coefficients: Vec<BigUint>,
    modulus: BigUint,
}

impl Polynomial {
    /// Build a polynomial with constant term `a0` and `threshold - 1` random
    /// coefficients drawn uniformly from `[0, modulus)`.
    pub fn with_fixed_constant<R: Rng + CryptoRng>(
        a0: BigUint,
        threshold: usize,
        modulus: BigUint,
        rng: &mut R,
    ) -> Result<Self, VsssError> {
        if threshold < 1 {
            return Err(VsssError::InvalidInputLength(
                "threshold must be at least 1".to_string(),
            ));
        }
        let mut coefficients = vec![a0];
        for _ in 1..threshold {
            coefficients.push(field::random_below(&modulus, rng));
        }
        Ok(Polynomial {
            coefficients,
            modulus,
        })
    }

    /// Build a polynomial with constant term `a0` and caller-supplied higher
    /// coefficients. Two calls sharing the same `coefficients` produce
    /// polynomials that differ only in the constant term, so their Feldman
    /// commitments agree everywhere but `c0`.
    pub fn with_coefficients(
        a0: BigUint,
        threshold: usize,
        modulus: BigUint,
        coefficients: &[BigUint],
    ) -> Result<Self, VsssError> {
        if threshold < 1 {
            return Err(VsssError::InvalidInputLength(
                "threshold must be at least 1".to_string(),
            ));
        }
        if coefficients.len() != threshold - 1 {
            return Err(VsssError::InvalidInputLength(format!(
                "expected {} coefficients for threshold {}, got {}",
                threshold - 1,
                threshold,
                coefficients.len()
            )));
        }
        let mut all = Vec::with_capacity(threshold);
        all.push(a0);
        all.extend_from_slice(coefficients);
        Ok(Polynomial {
            coefficients: all,
            modulus,
        })
    }

    /// Evaluate at `x` with Horner's rule:
    ///
    /// f(x) = a0 + x(a1 + x(a2 + ... + x*a_{t-1}))
    ///
    /// One multiplication per coefficient; no powers of x are materialized.
    pub fn evaluate(&self, x: &BigUint) -> Share {
        let mut r = BigUint::zero();
        for c in self.coefficients.iter().rev() {
            r = (r * x + c) % &self.modulus;
        }
        Share {
            index: x.clone(),
            value: r,
        }
    }

    /// Evaluate at each x in order. No deduplication or sorting; duplicate
    /// x-values pass through and only fail later at interpolation.
    pub fn evaluate_many(&self, xs: &[BigUint]) -> Vec<Share> {
        xs.iter().map(|x| self.evaluate(x)).collect()
    }

    /// Feldman commitments `[g^a0, g^a1, ..., g^a_{t-1}]`.
    pub fn commitments<G: Group>(&self, group: &G) -> Vec<G::Point> {
        let g = group.generator();
        self.coefficients
            .iter()
            .map(|a| group.mul(&g, a))
            .collect()
    }

    pub fn threshold(&self) -> usize {
        self.coefficients.len()
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }
}
