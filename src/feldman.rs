use num_bigint::BigUint;
use num_traits::One;

use crate::group::Group;

/// Verify a share `(index, value)` against Feldman commitments.
///
/// Checks g^value == c0 * c1^{x} * c2^{x^2} * ... * c_{t-1}^{x^{t-1}}
/// written additively: sum of `commits[i] * x^i` with `x^i` reduced mod the
/// group order.
///
/// Under discrete-log hardness a share passes iff `value = f(index)` for the
/// polynomial whose coefficients the commitments hide. This is a pure
/// predicate; callers decide how to treat a dishonest share, so it never
/// errors. An empty commitment vector verifies nothing and yields `false`.
pub fn verify_commits<G: Group>(
    commits: &[G::Point],
    index: &BigUint,
    value: &BigUint,
    group: &G,
) -> bool {
    if commits.is_empty() {
        return false;
    }
    let order = group.order();
    let x = index % &order;
    let mut x_pow = BigUint::one();
    let mut gv = commits[0].clone();
    for c in &commits[1..] {
        x_pow = &x_pow * &x % &order;
        gv = group.add(&gv, &group.mul(c, &x_pow));
    }
    let gy = group.mul(&group.generator(), value);
    gv == gy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::{Ed25519Group, Secp256k1Group};
    use crate::polynomial::Polynomial;
    use num_traits::Zero;
    use rand::rngs::OsRng;

    #[test]
    fn genuine_shares_verify_secp256k1() {
        let group = Secp256k1Group;
        let poly = Polynomial::with_fixed_constant(
            BigUint::from(31337u32),
            3,
            group.order(),
            &mut OsRng,
        )
        .unwrap();
        let commits = poly.commitments(&group);
        assert_eq!(commits.len(), 3);
        for x in 1u32..=5 {
            let share = poly.evaluate(&BigUint::from(x));
            assert!(verify_commits(&commits, &share.index, &share.value, &group));
        }
    }

    #[test]
    fn genuine_shares_verify_ed25519() {
        let group = Ed25519Group;
        let poly = Polynomial::with_fixed_constant(
            BigUint::from(271828u32),
            4,
            group.order(),
            &mut OsRng,
        )
        .unwrap();
        let commits = poly.commitments(&group);
        for x in 1u32..=4 {
            let share = poly.evaluate(&BigUint::from(x));
            assert!(verify_commits(&commits, &share.index, &share.value, &group));
        }
    }

    #[test]
    fn tampered_value_fails() {
        let group = Secp256k1Group;
        let poly =
            Polynomial::with_fixed_constant(BigUint::from(99u32), 2, group.order(), &mut OsRng)
                .unwrap();
        let commits = poly.commitments(&group);
        let share = poly.evaluate(&BigUint::from(1u32));
        let forged = (&share.value + BigUint::from(1u32)) % &group.order();
        assert!(!verify_commits(&commits, &share.index, &forged, &group));
    }

    #[test]
    fn empty_commitments_reject() {
        let group = Secp256k1Group;
        let commits: Vec<<Secp256k1Group as Group>::Point> = Vec::new();
        assert!(!verify_commits(
            &commits,
            &BigUint::from(1u32),
            &BigUint::zero(),
            &group
        ));
    }
}
