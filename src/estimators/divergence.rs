// SPDX-FileCopyrightText: 2026 netinfo contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Closed-form KL-type divergence between two Gaussian network models.

use ndarray::Array2;

use crate::errors::{Error, Result};
use crate::linalg;

/// Information divergence between two equal-dimension covariance matrices.
///
/// Returns `(d_ab, d_ba)` with
/// `d_ab = 0.5·(tr(Σ_b⁻¹ Σ_a) − n + ln(Π eig(Σ_b)/eig(Σ_a)))`.
///
/// The eigenvalue-ratio product is formed from ascending-sorted eigenvalues;
/// a negative product makes the log NaN, a documented numerical caveat that
/// is deliberately not auto-corrected.
pub fn information_divergence(sigma_a: &Array2<f64>, sigma_b: &Array2<f64>) -> Result<(f64, f64)> {
    let n = linalg::square_dim(sigma_a)?;
    let n_b = linalg::square_dim(sigma_b)?;
    if n != n_b {
        return Err(Error::DimensionMismatch {
            expected: n,
            found: n_b,
        });
    }

    let inv_a = linalg::inverse(sigma_a)?;
    let inv_b = linalg::inverse(sigma_b)?;

    let mut eig_a = linalg::eigenvalues_re(sigma_a).to_vec();
    let mut eig_b = linalg::eigenvalues_re(sigma_b).to_vec();
    eig_a.sort_by(|x, y| x.total_cmp(y));
    eig_b.sort_by(|x, y| x.total_cmp(y));

    let ratio_ab: f64 = eig_b.iter().zip(&eig_a).map(|(b, a)| b / a).product();
    let ratio_ba: f64 = eig_a.iter().zip(&eig_b).map(|(a, b)| a / b).product();

    let d_ab = 0.5 * (trace_of_product(&inv_b, sigma_a) - n as f64 + ratio_ab.ln());
    let d_ba = 0.5 * (trace_of_product(&inv_a, sigma_b) - n as f64 + ratio_ba.ln());
    Ok((d_ab, d_ba))
}

/// `tr(A·B)` without materializing the product.
fn trace_of_product(a: &Array2<f64>, b: &Array2<f64>) -> f64 {
    let n = a.nrows();
    let mut acc = 0.0;
    for i in 0..n {
        for j in 0..n {
            acc += a[[i, j]] * b[[j, i]];
        }
    }
    acc
}
