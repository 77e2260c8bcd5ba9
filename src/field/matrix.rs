//! Dense matrix operations over [`Gf256`].
//!
//! Matrices are represented as `Vec<Vec<u8>>`, row-major, with no dimension
//! tracked outside the `Vec` lengths themselves. This crate's matrices are
//! always small (Reed-Solomon's `k × k` encode/decode matrices, with `k < 256`),
//! so the allocation overhead of nested `Vec`s is not worth avoiding.

use super::Gf256;
use crate::error::{Error, Result};

/// Multiplies an `m × n` matrix `a` by an `n × p` matrix `b`, accumulating
/// column by column (a rank-1 outer-product update per term) rather than
/// row-by-row dot products.
pub fn matmul(gf: &Gf256, a: &[Vec<u8>], b: &[Vec<u8>]) -> Vec<Vec<u8>> {
    let m = a.len();
    let n = if m == 0 { 0 } else { a[0].len() };
    let p = if b.is_empty() { 0 } else { b[0].len() };

    let mut out = vec![vec![0u8; p]; m];
    for k in 0..n {
        for i in 0..m {
            let aik = a[i][k];
            if aik == 0 {
                continue;
            }
            for j in 0..p {
                out[i][j] = gf.add(out[i][j], gf.mul(aik, b[k][j]));
            }
        }
    }
    out
}

/// Solves `a · x = b` for `x` via Gauss-Jordan elimination with downward
/// pivot search, where `a` is `n × n` and `b` is `n × p`. Returns the
/// reduced `b` (now holding `x`) without mutating the caller's matrices.
///
/// Fails with [`Error::Singular`] if some column has no nonzero pivot at or
/// below the current row.
pub fn solve(gf: &Gf256, a: &[Vec<u8>], b: &[Vec<u8>]) -> Result<Vec<Vec<u8>>> {
    let n = a.len();
    let mut a: Vec<Vec<u8>> = a.to_vec();
    let mut b: Vec<Vec<u8>> = b.to_vec();

    for col in 0..n {
        let pivot_row = (col..n).find(|&r| a[r][col] != 0).ok_or(Error::Singular(col))?;
        if pivot_row != col {
            a.swap(pivot_row, col);
            b.swap(pivot_row, col);
        }

        let inv_pivot = gf.inv(a[col][col]);
        for v in a[col].iter_mut() {
            *v = gf.mul(*v, inv_pivot);
        }
        for v in b[col].iter_mut() {
            *v = gf.mul(*v, inv_pivot);
        }

        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = a[row][col];
            if factor == 0 {
                continue;
            }
            for c in 0..n {
                a[row][c] = gf.add(a[row][c], gf.mul(factor, a[col][c]));
            }
            for c in 0..b[row].len() {
                b[row][c] = gf.add(b[row][c], gf.mul(factor, b[col][c]));
            }
        }
    }

    Ok(b)
}

/// Builds the `n × n` identity matrix.
pub fn identity(n: usize) -> Vec<Vec<u8>> {
    (0..n)
        .map(|i| {
            let mut row = vec![0u8; n];
            row[i] = 1;
            row
        })
        .collect()
}

/// Inverts an `n × n` matrix via `solve(a, identity)`.
pub fn inv_mat(gf: &Gf256, a: &[Vec<u8>]) -> Result<Vec<Vec<u8>>> {
    solve(gf, a, &identity(a.len()))
}
