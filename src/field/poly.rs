//! Polynomial operations over [`Gf256`].
//!
//! Two coefficient conventions coexist here, and the split is load-bearing
//! rather than an oversight: [`poly_eval`] and [`poly_interpolate`] treat
//! coefficient slices as **increasing-degree** (`coeffs[0]` is the constant
//! term) wherever they represent a message or an interpolation result, while
//! the monic-linear-product family ([`poly_build_prod`],
//! [`poly_mul_linear_monic`], [`poly_synth_div_monic`]) stores
//! **decreasing-degree**, and [`poly_eval`] walks its input highest-degree
//! first. A Reed-Solomon message polynomial is therefore Horner-evaluated as
//! if its lowest-degree coefficient were the leading one, not the "real"
//! message polynomial, but encoder and decoder agree on the convention, so
//! round-tripping is unaffected. Preserve it exactly; it is observable at
//! the Reed-Solomon wire boundary.

use super::Gf256;
use crate::error::{Error, Result};

/// Evaluates a polynomial at `x` via Horner's method, treating `coeffs` as
/// highest-degree-first (`coeffs[0]` is the leading coefficient).
pub fn poly_eval(gf: &Gf256, coeffs: &[u8], x: u8) -> u8 {
    let mut result = 0u8;
    for &c in coeffs {
        result = gf.add(gf.mul(result, x), c);
    }
    result
}

/// Evaluates a polynomial at every point in `xs`.
pub fn poly_eval_many(gf: &Gf256, coeffs: &[u8], xs: &[u8]) -> Vec<u8> {
    xs.iter().map(|&x| poly_eval(gf, coeffs, x)).collect()
}

/// Multiplies a decreasing-degree polynomial `p` by the monic linear factor
/// `(z - a)`, i.e. `(z ⊕ a)` in GF(2^8). Returns a polynomial one degree
/// higher, also decreasing-degree.
pub fn poly_mul_linear_monic(gf: &Gf256, p: &[u8], a: u8) -> Vec<u8> {
    let n = p.len();
    let mut out = vec![0u8; n + 1];
    out[0] = p[0];
    for i in 1..n {
        out[i] = gf.add(p[i], gf.mul(p[i - 1], a));
    }
    out[n] = gf.mul(a, p[n - 1]);
    out
}

/// Builds $\prod_i (z - x_i)$ as a decreasing-degree coefficient vector of
/// length `xs.len() + 1`.
pub fn poly_build_prod(gf: &Gf256, xs: &[u8]) -> Vec<u8> {
    let mut p = vec![1u8];
    for &a in xs {
        p = poly_mul_linear_monic(gf, &p, a);
    }
    p
}

/// Synthetic division of a decreasing-degree polynomial `p` by the monic
/// linear factor `(z - a)`. The caller guarantees `(z - a)` divides `p`
/// exactly; the remainder is not computed or checked.
pub fn poly_synth_div_monic(gf: &Gf256, p: &[u8], a: u8) -> Vec<u8> {
    let m = p.len() - 1;
    let mut q = vec![0u8; m];
    q[0] = p[0];
    for i in 1..m {
        q[i] = gf.add(p[i], gf.mul(a, q[i - 1]));
    }
    q
}

/// Lagrange interpolation via a single global product polynomial.
///
/// Returns the increasing-degree coefficients (length `xs.len()`) of the
/// unique polynomial of degree `< xs.len()` passing through every
/// `(xs[i], ys[i])`.
///
/// Fails with [`Error::SizeMismatch`] if `xs` and `ys` have different
/// lengths, or [`Error::DuplicateNodes`] if any `x` value repeats (which
/// would make `P_i(x_i) = 0`, an unrecoverable divide-by-zero).
pub fn poly_interpolate(gf: &Gf256, xs: &[u8], ys: &[u8]) -> Result<Vec<u8>> {
    if xs.len() != ys.len() {
        return Err(Error::SizeMismatch {
            expected: xs.len(),
            got: ys.len(),
        });
    }
    let n = xs.len();

    let mut sorted = xs.to_vec();
    sorted.sort_unstable();
    if sorted.windows(2).any(|w| w[0] == w[1]) {
        return Err(Error::DuplicateNodes);
    }

    let p = poly_build_prod(gf, xs); // ∏ (z - x_i), length n + 1
    let mut coeffs = vec![0u8; n];
    for i in 0..n {
        let xi = xs[i];
        let pi = poly_synth_div_monic(gf, &p, xi); // length n
        let denom = poly_eval(gf, &pi, xi);
        if denom == 0 {
            return Err(Error::DuplicateNodes);
        }
        let wi = gf.inv(denom);
        let scale = gf.mul(ys[i], wi);
        for (c, &pc) in coeffs.iter_mut().zip(pi.iter()) {
            *c = gf.add(*c, gf.mul(pc, scale));
        }
    }
    Ok(coeffs)
}

/// Builds the `n`-row, `k`-column Vandermonde matrix `V[i][j] = xs[i]^j`,
/// returned row-major as `Vec<Vec<u8>>`.
pub fn vander_mat(gf: &Gf256, xs: &[u8], k: usize) -> Vec<Vec<u8>> {
    xs.iter()
        .map(|&x| {
            let mut row = vec![1u8; k];
            for j in 1..k {
                row[j] = gf.mul(row[j - 1], x);
            }
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_matches_reference_example() {
        let gf = Gf256::default();
        // p(x) = 1 + x + x^2, Horner on decreasing-degree [1,1,1].
        let coeffs = [1u8, 1, 1];
        assert_eq!(poly_eval(&gf, &coeffs, 0), 1);
        assert_eq!(poly_eval(&gf, &coeffs, 1), 1); // 1^1^1
        assert_eq!(poly_eval(&gf, &coeffs, 2), 0b111);
    }

    #[test]
    fn interpolate_round_trips_through_eval() {
        let gf = Gf256::default();
        let xs = [0u8, 1, 2, 3, 4];
        let original = [7u8, 200, 3, 99, 255];
        let ys = poly_eval_many(&gf, &original, &xs);
        let recovered = poly_interpolate(&gf, &xs, &ys).unwrap();
        // poly_interpolate returns increasing-degree coefficients of the
        // degree-(n-1) polynomial; re-evaluating it with poly_eval (which
        // treats its input as decreasing-degree) reproduces ys because both
        // sides share the same convention consistently.
        let re_ys = poly_eval_many(&gf, &recovered, &xs);
        assert_eq!(re_ys, ys);
    }

    #[test]
    fn interpolate_rejects_duplicate_nodes() {
        let gf = Gf256::default();
        let xs = [1u8, 1, 2];
        let ys = [1u8, 2, 3];
        assert_eq!(poly_interpolate(&gf, &xs, &ys), Err(Error::DuplicateNodes));
    }

    #[test]
    fn interpolate_rejects_size_mismatch() {
        let gf = Gf256::default();
        let xs = [1u8, 2, 3];
        let ys = [1u8, 2];
        assert!(matches!(
            poly_interpolate(&gf, &xs, &ys),
            Err(Error::SizeMismatch { .. })
        ));
    }

    #[test]
    fn vander_mat_shape_and_first_column() {
        let gf = Gf256::default();
        let xs = [0u8, 1, 2, 3];
        let v = vander_mat(&gf, &xs, 3);
        assert_eq!(v.len(), 4);
        assert!(v.iter().all(|row| row.len() == 3));
        assert!(v.iter().all(|row| row[0] == 1));
        assert_eq!(v[1][1], 1);
        assert_eq!(v[2][1], 2);
        assert_eq!(v[2][2], gf.mul(2, 2));
    }
}
