use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::VsssError;
use crate::field;
use crate::polynomial::Share;

/// Lagrange interpolation over `Z_modulus`.
///
/// Given points (x0,y0), ..., (xk,yk) of a polynomial of degree < threshold:
///
/// L(x)  = Sigma_{j} yj * lj(x)
/// lj(x) = Pi_{m != j} (x - xm) / (xj - xm)
///
/// Reconstructs `f(x)` from the first `threshold` entries of `points`. Extra
/// points are ignored; no quality selection or outlier rejection happens here.
/// Secret recovery calls this with `x = 0`.
pub fn interpolate_at(
    x: &BigUint,
    threshold: usize,
    points: &[Share],
    modulus: &BigUint,
) -> Result<BigUint, VsssError> {
    if points.len() < threshold {
        return Err(VsssError::InsufficientShares {
            got: points.len(),
            need: threshold,
        });
    }
    let points = &points[..threshold];
    let x = x % modulus;
    let mut y = BigUint::zero();
    for (j, pj) in points.iter().enumerate() {
        let xj = &pj.index % modulus;
        let mut num = BigUint::one();
        let mut den = BigUint::one();
        for (m, pm) in points.iter().enumerate() {
            if m == j {
                continue;
            }
            let xm = &pm.index % modulus;
            num = field::mod_mul(&num, &field::mod_sub(&x, &xm, modulus), modulus);
            den = field::mod_mul(&den, &field::mod_sub(&xj, &xm, modulus), modulus);
        }
        if den.is_zero() {
            return Err(VsssError::Arithmetic(format!(
                "duplicate x-coordinate {} among interpolation points",
                xj
            )));
        }
        let basis = field::mod_mul(&num, &field::mod_inv(&den, modulus)?, modulus);
        y = field::mod_add(&y, &field::mod_mul(&pj.value, &basis, modulus), modulus);
    }
    Ok(y)
}

/// The basis values `lj(x)` for every xj in `xs`, without combining with
/// y-values. Useful when interpolation weights are needed on their own.
pub fn basis_coefficients_at(
    x: &BigUint,
    xs: &[BigUint],
    modulus: &BigUint,
) -> Result<Vec<BigUint>, VsssError> {
    let x = x % modulus;
    let mut basis = Vec::with_capacity(xs.len());
    for (j, xj) in xs.iter().enumerate() {
        let xj = xj % modulus;
        let mut num = BigUint::one();
        let mut den = BigUint::one();
        for (m, xm) in xs.iter().enumerate() {
            if m == j {
                continue;
            }
            let xm = xm % modulus;
            num = field::mod_mul(&num, &field::mod_sub(&x, &xm, modulus), modulus);
            den = field::mod_mul(&den, &field::mod_sub(&xj, &xm, modulus), modulus);
        }
        if den.is_zero() {
            return Err(VsssError::Arithmetic(format!(
                "duplicate x-coordinate {} among basis points",
                xj
            )));
        }
        basis.push(field::mod_mul(
            &num,
            &field::mod_inv(&den, modulus)?,
            modulus,
        ));
    }
    Ok(basis)
}
