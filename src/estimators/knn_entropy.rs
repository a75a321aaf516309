// SPDX-FileCopyrightText: 2026 netinfo contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Kozachenko–Leonenko-type differential entropy from k-th nearest-neighbor
//! distances under the Chebyshev (L∞) metric.
//!
//! The query set equals the fit set, so every point's nearest neighbor is
//! itself at distance zero; the k-th neighbor radius therefore counts the
//! point itself first, and `k >= 2` is the smallest setting that looks at an
//! actual neighbor. This matches the reference semantics the other estimators
//! are calibrated against.

use ndarray::{ArrayView1, ArrayView2};
use rayon::prelude::*;
use statrs::function::gamma::digamma;

use crate::errors::{Error, Result};

fn chebyshev(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

/// Distance from each sample to its k-th nearest neighbor (self included).
///
/// Brute-force search; the samples have runtime dimensionality (joint clouds
/// concatenate two networks), so no fixed-dimension spatial index applies.
fn knn_radii(samples: ArrayView2<'_, f64>, k: usize) -> Vec<f64> {
    let n = samples.nrows();
    (0..n)
        .into_par_iter()
        .map(|i| {
            let mut dists: Vec<f64> = (0..n)
                .map(|j| chebyshev(samples.row(i), samples.row(j)))
                .collect();
            dists.sort_by(|a, b| a.total_cmp(b));
            dists[k - 1]
        })
        .collect()
}

/// Estimate the differential entropy of a point cloud (rows = samples).
///
/// `h = ψ(s) + ψ(k) + d·mean(ln r)` where `r` holds the per-sample k-th
/// neighbor Chebyshev radii. Fails with `InsufficientSamples` when `s <= k`.
pub fn knn_entropy(samples: ArrayView2<'_, f64>, k: usize) -> Result<f64> {
    let s = samples.nrows();
    if s <= k || k == 0 {
        return Err(Error::InsufficientSamples { samples: s, k });
    }
    let d = samples.ncols() as f64;
    let radii = knn_radii(samples, k);
    let mean_log_r = radii.iter().map(|r| r.ln()).sum::<f64>() / s as f64;
    Ok(digamma(s as f64) + digamma(k as f64) + d * mean_log_r)
}
