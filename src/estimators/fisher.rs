// SPDX-FileCopyrightText: 2026 netinfo contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fisher information of a covariance ensemble with respect to a control
//! parameter ensemble.
//!
//! Derivatives of Σ with respect to each parameter dimension are approximated
//! by finite differences between index-adjacent ensemble members. The caller
//! must supply theta rows that are unique and pre-sorted along the intended
//! differencing axis; this estimator neither sorts nor deduplicates.

use ndarray::{Array2, Array3};

use crate::errors::{Error, Result};
use crate::linalg;

/// Fisher information tensor of shape `(x-1) × k × k` for an ensemble of `x`
/// covariance matrices and an `x × k` parameter matrix.
///
/// For each parameter dimension `t`, the derivative between ensemble members
/// `i` and `i+1` is `(Σ_{i+1} − Σ_i) / (θ_{i+1,t} − θ_{i,t} + ε)`, zeroed
/// outright where the theta difference is exactly zero. Then
/// `fisher[i,j,l] = 0.5·tr(Σ_i⁻¹·∂Σ/∂θ_j·Σ_i⁻¹·∂Σ/∂θ_l)`.
pub fn fisher_information(
    sigma_ensemble: &[Array2<f64>],
    theta_matrix: &Array2<f64>,
) -> Result<Array3<f64>> {
    let x = theta_matrix.nrows();
    if sigma_ensemble.len() != x {
        return Err(Error::DimensionMismatch {
            expected: x,
            found: sigma_ensemble.len(),
        });
    }
    let k = theta_matrix.ncols();
    if x == 0 {
        return Ok(Array3::zeros((0, k, k)));
    }
    let n = linalg::square_dim(&sigma_ensemble[0])?;
    for sigma in sigma_ensemble {
        if linalg::square_dim(sigma)? != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                found: sigma.nrows(),
            });
        }
    }

    // derivatives[t][i] = dΣ/dθ_t between ensemble members i and i+1.
    let mut derivatives: Vec<Vec<Array2<f64>>> = Vec::with_capacity(k);
    for t in 0..k {
        let mut per_pair = Vec::with_capacity(x.saturating_sub(1));
        for i in 0..x.saturating_sub(1) {
            let d_theta = theta_matrix[[i + 1, t]] - theta_matrix[[i, t]];
            if d_theta == 0.0 {
                per_pair.push(Array2::zeros((n, n)));
            } else {
                let d_sigma = &sigma_ensemble[i + 1] - &sigma_ensemble[i];
                per_pair.push(d_sigma / (d_theta + f64::EPSILON));
            }
        }
        derivatives.push(per_pair);
    }

    let mut fisher = Array3::zeros((x.saturating_sub(1), k, k));
    for i in 0..x.saturating_sub(1) {
        let sigma_inv = linalg::inverse(&sigma_ensemble[i])?;
        for j in 0..k {
            let left = sigma_inv.dot(&derivatives[j][i]);
            for l in 0..k {
                let right = sigma_inv.dot(&derivatives[l][i]);
                fisher[[i, j, l]] = 0.5 * left.dot(&right).diag().sum();
            }
        }
    }
    Ok(fisher)
}
