// SPDX-FileCopyrightText: 2026 netinfo contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mutual information between two network GMRFs.
//!
//! Marginal entropies come in closed form from the covariance eigenvalues;
//! the joint entropy is estimated non-parametrically over a sampled joint
//! point cloud. The result is clamped to the feasible region
//! `0 <= mi <= min(h_a, h_b)`.

use ndarray::{Array1, Array2, Axis, concatenate};
use rand::Rng;

use crate::errors::Result;
use crate::estimators::knn_entropy::knn_entropy;
use crate::linalg;
use crate::sampler::sample_multivariate_gaussian;

/// Marginal entropies, KNN joint entropy, and the clamped mutual information.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MutualInformation {
    pub h_a: f64,
    pub h_b: f64,
    pub h_ab: f64,
    pub mi: f64,
}

/// Closed-form differential entropy of `N(0, sigma)`.
pub(crate) fn gaussian_entropy(sigma: &Array2<f64>) -> f64 {
    let n = sigma.nrows() as f64;
    let log_det: f64 = linalg::eigenvalues_re(sigma).iter().map(|e| e.ln()).sum();
    (1.0 + (2.0 * std::f64::consts::PI).ln()) * n / 2.0 + log_det / 2.0
}

/// Estimate the mutual information between two networks.
///
/// Draws `sample_num` independent zero-mean samples per network, estimates
/// the joint entropy with the k-th nearest-neighbor estimator, and returns
/// `mi = min(max(h_a + h_b − h_ab, 0), h_a, h_b)`.
pub fn mutual_information(
    sigma_a: &Array2<f64>,
    sigma_b: &Array2<f64>,
    sample_num: usize,
    k: usize,
    rng: &mut impl Rng,
) -> Result<MutualInformation> {
    let (samples_a, _) =
        sample_multivariate_gaussian(&Array1::zeros(sigma_a.nrows()), sigma_a, sample_num, rng)?;
    let (samples_b, _) =
        sample_multivariate_gaussian(&Array1::zeros(sigma_b.nrows()), sigma_b, sample_num, rng)?;

    // Rows become samples: (n_a + n_b) × s stacked, then transposed.
    let joint = concatenate(Axis(0), &[samples_a.view(), samples_b.view()])
        .expect("sample matrices share the sample axis");
    let joint = joint.t();

    // Marginal entropies are clamped to >= 0 before entering the bound.
    let h_a = gaussian_entropy(sigma_a).max(0.0);
    let h_b = gaussian_entropy(sigma_b).max(0.0);
    let h_ab = knn_entropy(joint.view(), k)?;

    let mi = (h_a + h_b - h_ab).max(0.0).min(h_a).min(h_b);
    Ok(MutualInformation { h_a, h_b, h_ab, mi })
}
