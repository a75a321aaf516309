// SPDX-FileCopyrightText: 2026 netinfo contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Random graph sources.
//!
//! The estimators treat adjacency matrices as opaque inputs; these generators
//! exist so the experiment pipeline is self-contained. All of them draw from
//! a caller-owned RNG.

use ndarray::Array2;
use rand::Rng;

use crate::linalg;

/// Erdős–Rényi adjacency: every unordered pair is an edge with probability
/// `p`. Symmetric, zero diagonal, entries in {0, 1}.
pub fn erdos_renyi(n: usize, p: f64, rng: &mut impl Rng) -> Array2<f64> {
    let mut adjacency = Array2::zeros((n, n));
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_range(0.0..1.0) < p {
                adjacency[[i, j]] = 1.0;
                adjacency[[j, i]] = 1.0;
            }
        }
    }
    adjacency
}

/// Watts–Strogatz adjacency: ring lattice with `k` clockwise neighbors per
/// node, each lattice edge rewired with probability `beta` to a uniformly
/// chosen non-duplicate target.
pub fn watts_strogatz(n: usize, k: usize, beta: f64, rng: &mut impl Rng) -> Array2<f64> {
    let mut adjacency: Array2<f64> = Array2::zeros((n, n));
    for source in 0..n {
        for offset in 1..=k {
            let mut target = (source + offset) % n;
            if target == source {
                continue;
            }
            if rng.gen_range(0.0..1.0) < beta {
                // Rewire to a fresh target; fall back to the lattice edge
                // when the node is already saturated.
                let candidates: Vec<usize> = (0..n)
                    .filter(|&c| c != source && adjacency[[source, c]] == 0.0)
                    .collect();
                if !candidates.is_empty() {
                    target = candidates[rng.gen_range(0..candidates.len())];
                }
            }
            adjacency[[source, target]] = 1.0;
            adjacency[[target, source]] = 1.0;
        }
    }
    adjacency
}

/// Apply symmetric uniform edge weights in `[lo, hi)` to an adjacency matrix.
///
/// A full random base matrix is symmetrized from its strict upper triangle
/// and multiplied elementwise into the adjacency, so weighted edges stay
/// symmetric with a zero diagonal.
pub fn random_edge_weights(
    adjacency: &Array2<f64>,
    lo: f64,
    hi: f64,
    rng: &mut impl Rng,
) -> Array2<f64> {
    let base = Array2::from_shape_fn(adjacency.dim(), |_| rng.gen_range(lo..hi));
    adjacency * &linalg::symmetric_with_zero_diagonal(&base)
}
