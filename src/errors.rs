// SPDX-FileCopyrightText: 2026 netinfo contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error taxonomy shared by every estimator.
//!
//! All violations are raised at the point of detection; the crate performs no
//! local recovery beyond the two documented numerical repairs (diagonal
//! loading before Cholesky, eigenvalue flooring before logs).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Input matrices or vectors disagree in size, or a matrix is not square.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// The shifted Laplacian (or a covariance factorization) is singular.
    #[error("singular matrix: {context}")]
    SingularMatrix { context: &'static str },

    /// A covariance candidate fails the symmetry check beyond tolerance 1e-8.
    #[error("matrix is not symmetric, residual norm: {norm}")]
    NotSymmetric { norm: f64 },

    /// Approximation target size outside [1, node count).
    #[error("invalid target size {target} for a network of {nodes} nodes")]
    InvalidSize { target: usize, nodes: usize },

    /// KNN entropy requested with k >= sample count.
    #[error("insufficient samples: {samples} samples for k = {k}")]
    InsufficientSamples { samples: usize, k: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
