// SPDX-FileCopyrightText: 2026 netinfo contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gaussian Markov random field construction from a weighted adjacency matrix.
//!
//! A weighted graph induces a multivariate Gaussian over node values whose
//! covariance is derived from the graph Laplacian: either the "regularized"
//! Laplacian `L + J/n` or its pseudoinverse-based counterpart `pinv(L) + J/n`,
//! with `J` the all-ones matrix. The rank-one correction makes the otherwise
//! rank-deficient Laplacian strictly positive definite.

use ndarray::{Array1, Array2, Axis};

use crate::errors::Result;
use crate::linalg;

/// How the adjacency matrix is interpreted when forming the Laplacian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphType {
    /// Symmetric adjacency, used as-is.
    #[default]
    Undirected,
    /// Directed graph read along incoming edges (adjacency is transposed).
    DirectedIn,
    /// Directed graph read along outgoing edges (adjacency used as-is).
    DirectedOut,
    /// Directed graph symmetrized as `W + Wᵀ`.
    DirectedSymmetric,
}

/// Configuration surface of the model builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct GmrfOptions {
    pub graph_type: GraphType,
    /// Build the random-walk normalized Laplacian `I - P` instead of `D - W`.
    pub normalize: bool,
    /// Derive the covariance from the pseudoinverse instead of the Laplacian.
    pub take_pseudoinverse: bool,
}

/// Laplacian, its pseudoinverse, and the induced covariance of one network.
#[derive(Debug, Clone)]
pub struct GmrfModel {
    pub laplacian: Array2<f64>,
    pub pinv_laplacian: Array2<f64>,
    pub covariance: Array2<f64>,
}

impl GmrfModel {
    /// Build the GMRF model of a weighted adjacency matrix.
    ///
    /// Fails with `DimensionMismatch` when `weights` is not square and with
    /// `SingularMatrix` when the shifted Laplacian cannot be inverted.
    pub fn from_adjacency(weights: &Array2<f64>, options: &GmrfOptions) -> Result<Self> {
        let n = linalg::square_dim(weights)?;

        let w = match options.graph_type {
            GraphType::Undirected | GraphType::DirectedOut => weights.clone(),
            GraphType::DirectedIn => weights.t().to_owned(),
            GraphType::DirectedSymmetric => weights + &weights.t(),
        };

        let degrees: Array1<f64> = w.sum_axis(Axis(1));
        let laplacian = if options.normalize {
            // Zero-degree nodes get unit degree and an all-ones transition
            // row, so the normalization never divides by zero.
            let mut transition = Array2::zeros((n, n));
            for i in 0..n {
                if degrees[i] == 0.0 {
                    transition.row_mut(i).fill(1.0);
                } else {
                    for j in 0..n {
                        transition[[i, j]] = w[[i, j]] / degrees[i];
                    }
                }
            }
            Array2::eye(n) - transition
        } else {
            let mut l = -w;
            for i in 0..n {
                l[[i, i]] += degrees[i];
            }
            l
        };

        let pinv_laplacian = linalg::pseudoinverse(&laplacian)?;
        let shift = 1.0 / n as f64;
        let covariance = if options.take_pseudoinverse {
            &pinv_laplacian + shift
        } else {
            &laplacian + shift
        };

        Ok(Self {
            laplacian,
            pinv_laplacian,
            covariance,
        })
    }

    /// Node count of the modeled network.
    pub fn len(&self) -> usize {
        self.laplacian.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.laplacian.is_empty()
    }
}
