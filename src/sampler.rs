// SPDX-FileCopyrightText: 2026 netinfo contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Multivariate Gaussian sampling via Cholesky factorization.

use ndarray::{Array1, Array2};
use rand::Rng;
use rand_distr::StandardNormal;

use crate::errors::{Error, Result};
use crate::linalg;

/// Tolerance on the Frobenius norm of `Σ - Σᵀ`.
const SYMMETRY_TOL: f64 = 1e-8;

/// Diagonal loading applied when Σ has a negative eigenvalue. A numerical
/// floor, not a correctness guarantee.
const DIAGONAL_LOADING: f64 = 1e-8;

/// Draw `n_samples` samples from `N(mu, sigma)`.
///
/// Returns a `d × n_samples` matrix whose columns are samples, together with
/// the lower Cholesky factor G of the covariance (`Σ = G Gᵀ`), so the samples
/// are `Y = G·Z + μ` with Z standard normal.
///
/// Fails with `DimensionMismatch` when `mu` and `sigma` disagree or `sigma`
/// is not square, `NotSymmetric` when the symmetry residual exceeds 1e-8, and
/// `SingularMatrix` when factorization fails even after diagonal loading.
pub fn sample_multivariate_gaussian(
    mu: &Array1<f64>,
    sigma: &Array2<f64>,
    n_samples: usize,
    rng: &mut impl Rng,
) -> Result<(Array2<f64>, Array2<f64>)> {
    let d = linalg::square_dim(sigma)?;
    if mu.len() != d {
        return Err(Error::DimensionMismatch {
            expected: d,
            found: mu.len(),
        });
    }
    let residual = linalg::symmetry_residual(sigma);
    if residual >= SYMMETRY_TOL {
        return Err(Error::NotSymmetric { norm: residual });
    }

    let min_eig = linalg::sym_eigenvalues(sigma)
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min);
    let factor = if min_eig < 0.0 {
        let mut loaded = sigma.clone();
        for i in 0..d {
            loaded[[i, i]] += DIAGONAL_LOADING;
        }
        linalg::cholesky_lower(&loaded)?
    } else {
        linalg::cholesky_lower(sigma)?
    };

    let z = Array2::from_shape_fn((d, n_samples), |_| rng.sample::<f64, _>(StandardNormal));
    let mut samples = factor.dot(&z);
    for mut column in samples.columns_mut() {
        column += mu;
    }
    Ok((samples, factor))
}
