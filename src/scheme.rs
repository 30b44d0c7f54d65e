use std::collections::HashSet;

use num_bigint::BigUint;
use num_traits::Zero;
use rand::rngs::OsRng;

use crate::error::VsssError;
use crate::feldman;
use crate::field;
use crate::group::{Ed25519Group, Group, NoGroup, Secp256k1Group};
use crate::lagrange;
use crate::polynomial::{Polynomial, Share};

/// Shamir secret sharing over a prime field, with optional Feldman
/// commitments when a group is attached.
///
/// One generic implementation covers all three parameterizations: an
/// arbitrary caller-supplied prime (`over_prime`), the secp256k1 scalar field
/// (`secp256k1`) and the ed25519 scalar field (`ed25519`). The modulus and
/// group are fixed at construction and never change; every operation is a
/// single-shot computation over its inputs.
#[derive(Debug, Clone)]
pub struct ShareScheme<G = NoGroup> {
    modulus: BigUint,
    group: G,
}

impl ShareScheme<NoGroup> {
    /// Commitment-free sharing over an arbitrary prime modulus.
    pub fn over_prime(modulus: BigUint) -> Self {
        ShareScheme {
            modulus,
            group: NoGroup,
        }
    }
}

impl ShareScheme<Secp256k1Group> {
    /// Sharing over the secp256k1 scalar field, commitments in the curve
    /// group.
    pub fn secp256k1() -> Self {
        let group = Secp256k1Group;
        ShareScheme {
            modulus: group.order(),
            group,
        }
    }
}

impl ShareScheme<Ed25519Group> {
    /// Sharing over the ed25519 scalar field, commitments in the curve group.
    pub fn ed25519() -> Self {
        let group = Ed25519Group;
        ShareScheme {
            modulus: group.order(),
            group,
        }
    }
}

impl<G> ShareScheme<G> {
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Split `secret` into `n` shares, any `threshold` of which reconstruct
    /// it. `indices` supplies the share x-coordinates; its length must equal
    /// `n`, and each index must be nonzero and distinct mod the modulus.
    pub fn make_shares(
        &self,
        secret: &BigUint,
        threshold: usize,
        indices: &[BigUint],
        n: usize,
    ) -> Result<Vec<Share>, VsssError> {
        let poly = self.sample_polynomial(secret, threshold, indices, n)?;
        Ok(poly.evaluate_many(indices))
    }

    /// Draw `threshold - 1` uniform field elements for later use as the
    /// higher-degree coefficients of a sharing polynomial. Pre-generating the
    /// array lets several sharings of different secrets reuse the same
    /// coefficients (their commitments then differ only in `c0`).
    pub fn make_random_coefficients(&self, threshold: usize) -> Result<Vec<BigUint>, VsssError> {
        if threshold < 1 {
            return Err(VsssError::InvalidInputLength(
                "threshold must be at least 1".to_string(),
            ));
        }
        let mut coefficients = Vec::with_capacity(threshold - 1);
        for _ in 1..threshold {
            coefficients.push(field::random_below(&self.modulus, &mut OsRng));
        }
        Ok(coefficients)
    }

    /// Recover the secret by interpolating at x = 0. At least `threshold`
    /// shares are required; the first `threshold` of them are used.
    pub fn recover_secret(
        &self,
        threshold: usize,
        shares: &[Share],
    ) -> Result<BigUint, VsssError> {
        lagrange::interpolate_at(&BigUint::zero(), threshold, shares, &self.modulus)
    }

    fn sample_polynomial(
        &self,
        secret: &BigUint,
        threshold: usize,
        indices: &[BigUint],
        n: usize,
    ) -> Result<Polynomial, VsssError> {
        self.check_indices(indices, n)?;
        Polynomial::with_fixed_constant(secret.clone(), threshold, self.modulus.clone(), &mut OsRng)
    }

    fn check_indices(&self, indices: &[BigUint], n: usize) -> Result<(), VsssError> {
        if indices.len() != n {
            return Err(VsssError::InvalidInputLength(format!(
                "expected {} share indices, got {}",
                n,
                indices.len()
            )));
        }
        let mut seen = HashSet::with_capacity(indices.len());
        for index in indices {
            let reduced = index % &self.modulus;
            if reduced.is_zero() {
                return Err(VsssError::InvalidShareIndex(
                    "share index is zero mod the modulus".to_string(),
                ));
            }
            if !seen.insert(reduced) {
                return Err(VsssError::InvalidShareIndex(format!(
                    "duplicate share index {}",
                    index
                )));
            }
        }
        Ok(())
    }
}

impl<G: Group> ShareScheme<G> {
    /// A scheme over a caller-supplied prime with a caller-supplied group.
    pub fn with_group(modulus: BigUint, group: G) -> Self {
        ShareScheme { modulus, group }
    }

    /// As `make_shares`, additionally returning the Feldman commitments
    /// `[g^a0, ..., g^a_{t-1}]` of the generated polynomial.
    pub fn make_shares_with_commits(
        &self,
        secret: &BigUint,
        threshold: usize,
        indices: &[BigUint],
        n: usize,
    ) -> Result<(Vec<Share>, Vec<G::Point>), VsssError> {
        let poly = self.sample_polynomial(secret, threshold, indices, n)?;
        Ok((poly.evaluate_many(indices), poly.commitments(&self.group)))
    }

    /// As `make_shares_with_commits`, but the higher-degree coefficients are
    /// the caller's `coefficients` instead of fresh randomness. Requires
    /// `coefficients.len() == threshold - 1`.
    pub fn make_shares_with_commits_on_coefficients(
        &self,
        secret: &BigUint,
        threshold: usize,
        indices: &[BigUint],
        n: usize,
        coefficients: &[BigUint],
    ) -> Result<(Vec<Share>, Vec<G::Point>), VsssError> {
        self.check_indices(indices, n)?;
        let poly = Polynomial::with_coefficients(
            secret.clone(),
            threshold,
            self.modulus.clone(),
            coefficients,
        )?;
        Ok((poly.evaluate_many(indices), poly.commitments(&self.group)))
    }

    /// Feldman share verification; `true` iff the share lies on the committed
    /// polynomial.
    pub fn verify_share(&self, commits: &[G::Point], index: &BigUint, value: &BigUint) -> bool {
        feldman::verify_commits(commits, index, value, &self.group)
    }
}
