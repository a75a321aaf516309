// SPDX-FileCopyrightText: 2026 netinfo contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dense linear-algebra primitives over `ndarray` matrices.
//!
//! Decompositions are delegated to nalgebra behind small conversion shims, so
//! the rest of the crate works exclusively with `Array2<f64>`.

use nalgebra::{Complex, DMatrix};
use ndarray::{Array1, Array2};

use crate::errors::{Error, Result};

fn to_dmatrix(a: &Array2<f64>) -> DMatrix<f64> {
    DMatrix::from_row_iterator(a.nrows(), a.ncols(), a.iter().copied())
}

fn from_dmatrix(m: &DMatrix<f64>) -> Array2<f64> {
    Array2::from_shape_fn((m.nrows(), m.ncols()), |(i, j)| m[(i, j)])
}

/// Ensure `a` is square and return its order.
pub(crate) fn square_dim(a: &Array2<f64>) -> Result<usize> {
    if a.nrows() != a.ncols() {
        return Err(Error::DimensionMismatch {
            expected: a.nrows(),
            found: a.ncols(),
        });
    }
    Ok(a.nrows())
}

/// LU inverse. Fails with `SingularMatrix` when no inverse exists.
pub fn inverse(a: &Array2<f64>) -> Result<Array2<f64>> {
    square_dim(a)?;
    let inv = to_dmatrix(a)
        .try_inverse()
        .ok_or(Error::SingularMatrix {
            context: "matrix inversion failed",
        })?;
    Ok(from_dmatrix(&inv))
}

/// Eigenvalues of a symmetric matrix, unsorted.
pub fn sym_eigenvalues(a: &Array2<f64>) -> Array1<f64> {
    let eig = to_dmatrix(a).symmetric_eigen();
    Array1::from_iter(eig.eigenvalues.iter().copied())
}

/// Real parts of the eigenvalues of a general square matrix.
///
/// Mirrors taking `np.linalg.eigvals` on a possibly non-symmetric input and
/// discarding the (numerically tiny) imaginary parts.
pub fn eigenvalues_re(a: &Array2<f64>) -> Array1<f64> {
    let eig = to_dmatrix(a).complex_eigenvalues();
    Array1::from_iter(eig.iter().map(|c: &Complex<f64>| c.re))
}

/// Lower Cholesky factor G with `a = G Gᵀ`.
///
/// Gᵀ is the upper factor R of the sampler contract (`Σ = RᵀR`), so sampling
/// `Rᵀ·Z` is exactly `G·Z`.
pub fn cholesky_lower(a: &Array2<f64>) -> Result<Array2<f64>> {
    let chol = nalgebra::Cholesky::new(to_dmatrix(a)).ok_or(Error::SingularMatrix {
        context: "Cholesky factorization failed",
    })?;
    Ok(from_dmatrix(&chol.l()))
}

/// Moore–Penrose pseudoinverse of a graph Laplacian.
///
/// Uses the shift identity `pinv(L) = inv(L + J/n) - J/n`, valid for
/// Laplacians whose null space is spanned by the all-ones vector, so no
/// general pseudoinverse machinery is needed. Fails with `SingularMatrix`
/// when the shifted matrix is itself singular (degenerate graph).
pub fn pseudoinverse(laplacian: &Array2<f64>) -> Result<Array2<f64>> {
    let n = square_dim(laplacian)?;
    let shift = 1.0 / n as f64;
    let shifted = laplacian + shift;
    Ok(inverse(&shifted)? - shift)
}

/// Strict upper triangle mirrored below the diagonal; the diagonal is zeroed.
pub fn symmetric_with_zero_diagonal(a: &Array2<f64>) -> Array2<f64> {
    let n = a.nrows().min(a.ncols());
    let mut out = Array2::zeros((n, n));
    for i in 0..n {
        for j in (i + 1)..n {
            out[[i, j]] = a[[i, j]];
            out[[j, i]] = a[[i, j]];
        }
    }
    out
}

/// Frobenius norm of `a - aᵀ`, the symmetry residual checked by the sampler.
pub fn symmetry_residual(a: &Array2<f64>) -> f64 {
    let mut acc = 0.0;
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            let d = a[[i, j]] - a[[j, i]];
            acc += d * d;
        }
    }
    acc.sqrt()
}
