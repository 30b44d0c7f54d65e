use curve25519_dalek::constants::ED25519_BASEPOINT_POINT;
use curve25519_dalek::{EdwardsPoint, Scalar as EdScalar};
use k256::elliptic_curve::bigint::Encoding;
use k256::elliptic_curve::ops::Reduce;
use k256::elliptic_curve::Curve;
use k256::{ProjectivePoint, Scalar, Secp256k1, U256};
use num_bigint::BigUint;

/// A prime-order group suitable for Feldman commitments: a generator, the
/// group order, scalar multiplication, addition, and point equality (via
/// `PartialEq` on the point type).
///
/// Implementations are plain values handed to the scheme at construction
/// time; there is no process-global curve state.
pub trait Group {
    type Point: Clone + PartialEq + core::fmt::Debug;

    fn generator(&self) -> Self::Point;
    fn order(&self) -> BigUint;
    /// `point * scalar`. The scalar is reduced mod the group order first, so
    /// elements of a wider field are accepted.
    fn mul(&self, point: &Self::Point, scalar: &BigUint) -> Self::Point;
    fn add(&self, lhs: &Self::Point, rhs: &Self::Point) -> Self::Point;
}

/// Marker for schemes over an arbitrary prime with no commitment support.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGroup;

/// The secp256k1 group; scalars live in the curve's scalar field.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Group;

fn secp256k1_scalar(value: &BigUint, order: &BigUint) -> Scalar {
    let bytes = (value % order).to_bytes_be();
    let mut buf = [0u8; 32];
    buf[32 - bytes.len()..].copy_from_slice(&bytes);
    <Scalar as Reduce<U256>>::reduce(U256::from_be_slice(&buf))
}

impl Group for Secp256k1Group {
    type Point = ProjectivePoint;

    fn generator(&self) -> ProjectivePoint {
        ProjectivePoint::GENERATOR
    }

    fn order(&self) -> BigUint {
        BigUint::from_bytes_be(&Secp256k1::ORDER.to_be_bytes())
    }

    fn mul(&self, point: &ProjectivePoint, scalar: &BigUint) -> ProjectivePoint {
        *point * secp256k1_scalar(scalar, &self.order())
    }

    fn add(&self, lhs: &ProjectivePoint, rhs: &ProjectivePoint) -> ProjectivePoint {
        *lhs + *rhs
    }
}

/// The ed25519 group; scalars live in the prime-order subgroup of order l.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Group;

// l = 2^252 + 27742317777372353535851937790883648493, big-endian.
// curve25519-dalek 4.x no longer exports the basepoint order.
const ED25519_ORDER_BE: [u8; 32] = [
    0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x14, 0xde, 0xf9, 0xde, 0xa2, 0xf7, 0x9c, 0xd6, 0x58, 0x12, 0x63, 0x1a, 0x5c, 0xf5,
    0xd3, 0xed,
];

fn ed25519_scalar(value: &BigUint, order: &BigUint) -> EdScalar {
    let bytes = (value % order).to_bytes_le();
    let mut buf = [0u8; 32];
    buf[..bytes.len()].copy_from_slice(&bytes);
    EdScalar::from_bytes_mod_order(buf)
}

impl Group for Ed25519Group {
    type Point = EdwardsPoint;

    fn generator(&self) -> EdwardsPoint {
        ED25519_BASEPOINT_POINT
    }

    fn order(&self) -> BigUint {
        BigUint::from_bytes_be(&ED25519_ORDER_BE)
    }

    fn mul(&self, point: &EdwardsPoint, scalar: &BigUint) -> EdwardsPoint {
        *point * ed25519_scalar(scalar, &self.order())
    }

    fn add(&self, lhs: &EdwardsPoint, rhs: &EdwardsPoint) -> EdwardsPoint {
        *lhs + *rhs
    }
}
