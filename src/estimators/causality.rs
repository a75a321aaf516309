// SPDX-FileCopyrightText: 2026 netinfo contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Granger causality and transfer entropy from network A to network B.
//!
//! B's variables are split into two random subsets B1/B2 per repetition. The
//! transfer-entropy statistic is an entropy difference over sampled clouds;
//! the Granger statistic compares the log-determinant of the conditional
//! covariance of B1 given B2 (exact Schur complement of Σ_b) against the
//! conditional covariance of B2 given (B1, A) estimated from empirical sample
//! covariances. Repetitions share no state beyond the caller's RNG, so the
//! A→B and B→A directions are two independent calls with swapped arguments.

use ndarray::{Array1, Array2, Axis, concatenate};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::{Error, Result};
use crate::estimators::knn_entropy::knn_entropy;
use crate::estimators::mutual_information::gaussian_entropy;
use crate::linalg;
use crate::sampler::sample_multivariate_gaussian;

/// Per-partition statistics and their means for one causal direction.
#[derive(Debug, Clone)]
pub struct CausalityEstimate {
    /// Granger causality value per random partition.
    pub granger_vec: Vec<f64>,
    /// Mean Granger causality over all partitions.
    pub granger_causality: f64,
    /// Transfer entropy value per random partition.
    pub transfer_entropy_vec: Vec<f64>,
    /// Mean transfer entropy over all partitions.
    pub transfer_entropy: f64,
    /// Realized size of B1 per partition, each in `[1, n_b - 1]`.
    pub split_sizes: Vec<usize>,
}

/// Induced submatrix in the given row/column index order, as a dense copy.
fn select_submatrix(a: &Array2<f64>, rows: &[usize], cols: &[usize]) -> Array2<f64> {
    Array2::from_shape_fn((rows.len(), cols.len()), |(i, j)| a[[rows[i], cols[j]]])
}

/// Empirical cross-covariance of two sample clouds (rows = samples),
/// denominator `s - 1`.
fn empirical_cross_covariance(x: &Array2<f64>, y: &Array2<f64>) -> Array2<f64> {
    let s = x.nrows() as f64;
    let x_mean = x.mean_axis(Axis(0)).expect("non-empty sample cloud");
    let y_mean = y.mean_axis(Axis(0)).expect("non-empty sample cloud");
    let x_c = x - &x_mean;
    let y_c = y - &y_mean;
    x_c.t().dot(&y_c) / (s - 1.0)
}

/// Sum of log eigenvalues with non-positive eigenvalues floored to 1, so they
/// contribute nothing instead of a domain error.
fn floored_log_det(sigma: &Array2<f64>) -> f64 {
    linalg::eigenvalues_re(sigma)
        .iter()
        .map(|&e| if e <= 0.0 { 0.0 } else { e.ln() })
        .sum()
}

/// Estimate Granger causality and transfer entropy from A to B.
///
/// `rand_partition_num` random bipartitions of B are drawn from the caller's
/// RNG; each contributes one Granger and one transfer-entropy sample.
/// Fails with `InvalidSize` when B has fewer than two nodes (no bipartition
/// exists) and propagates sampler/estimator errors unchanged.
pub fn granger_causality_and_transfer_entropy(
    sigma_a: &Array2<f64>,
    sigma_b: &Array2<f64>,
    sample_num: usize,
    rand_partition_num: usize,
    k: usize,
    rng: &mut impl Rng,
) -> Result<CausalityEstimate> {
    let n_a = linalg::square_dim(sigma_a)?;
    let n_b = linalg::square_dim(sigma_b)?;
    if n_b < 2 {
        return Err(Error::InvalidSize {
            target: 1,
            nodes: n_b,
        });
    }

    let h_b = gaussian_entropy(sigma_b);

    let mut granger_vec = Vec::with_capacity(rand_partition_num);
    let mut transfer_entropy_vec = Vec::with_capacity(rand_partition_num);
    let mut split_sizes = Vec::with_capacity(rand_partition_num);

    for _ in 0..rand_partition_num {
        let mut perm: Vec<usize> = (0..n_b).collect();
        perm.shuffle(rng);
        let size = rng.gen_range(1..n_b);
        let (b1_idx, b2_idx) = perm.split_at(size);
        split_sizes.push(size);

        let subnet_b1 = select_submatrix(sigma_b, b1_idx, b1_idx);
        let subnet_b2 = select_submatrix(sigma_b, b2_idx, b2_idx);

        // Transfer entropy: h_b + h(A, B1) - h(B1) - h(A, B).
        let (samples_a, _) =
            sample_multivariate_gaussian(&Array1::zeros(n_a), sigma_a, sample_num, rng)?;
        let (samples_b1, _) =
            sample_multivariate_gaussian(&Array1::zeros(size), &subnet_b1, sample_num, rng)?;

        let joint_a_b1 = concatenate(Axis(0), &[samples_a.view(), samples_b1.view()])
            .expect("sample matrices share the sample axis");
        let h_a_b1 = knn_entropy(joint_a_b1.t(), k)?;
        let h_b1 = knn_entropy(samples_b1.t(), k)?;

        let (samples_b, _) =
            sample_multivariate_gaussian(&Array1::zeros(n_b), sigma_b, sample_num, rng)?;
        let joint_a_b = concatenate(Axis(0), &[samples_a.view(), samples_b.view()])
            .expect("sample matrices share the sample axis");
        let h_ab = knn_entropy(joint_a_b.t(), k)?;

        transfer_entropy_vec.push(h_b + h_a_b1 - h_b1 - h_ab);

        // Granger causality: exact conditional covariance of B1 given B2...
        let cross_12 = select_submatrix(sigma_b, b1_idx, b2_idx);
        let cross_21 = select_submatrix(sigma_b, b2_idx, b1_idx);
        let sigma_1 = &subnet_b1 - &cross_12.dot(&linalg::inverse(&subnet_b2)?).dot(&cross_21);

        // ...against the conditional covariance of B2 given (B1, A), with the
        // conditioning blocks estimated from empirical sample covariances.
        let cloud_b1_a = concatenate(Axis(0), &[samples_b1.view(), samples_a.view()])
            .expect("sample matrices share the sample axis")
            .t()
            .to_owned();
        let (samples_b2, _) = sample_multivariate_gaussian(
            &Array1::zeros(n_b - size),
            &subnet_b2,
            sample_num,
            rng,
        )?;
        let cloud_b2 = samples_b2.t().to_owned();

        let cov_b2_b1a = empirical_cross_covariance(&cloud_b2, &cloud_b1_a);
        let cov_b1a = empirical_cross_covariance(&cloud_b1_a, &cloud_b1_a);
        let sigma_2 = &subnet_b2
            - &cov_b2_b1a
                .dot(&linalg::inverse(&cov_b1a)?)
                .dot(&cov_b2_b1a.t());

        granger_vec.push(floored_log_det(&sigma_1) - floored_log_det(&sigma_2));
    }

    let mean = |v: &[f64]| v.iter().sum::<f64>() / v.len().max(1) as f64;
    Ok(CausalityEstimate {
        granger_causality: mean(&granger_vec),
        transfer_entropy: mean(&transfer_entropy_vec),
        granger_vec,
        transfer_entropy_vec,
        split_sizes,
    })
}
