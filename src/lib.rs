// SPDX-FileCopyrightText: 2026 netinfo contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # netinfo
//!
//! Information-theoretic comparison of two random networks modeled as
//! Gaussian Markov random fields (GMRFs): information divergence, mutual
//! information, Fisher information, and Granger causality / transfer entropy,
//! plus a Laplacian-energy-based size approximation when the networks
//! disagree in node count.
//!
//! ## Quick Start
//!
//! ```rust
//! use ndarray::array;
//! use netinfo::gmrf::{GmrfModel, GmrfOptions};
//! use netinfo::estimators::information_divergence;
//!
//! // 4-node cycle with unit weights.
//! let weights = array![
//!     [0.0, 1.0, 0.0, 1.0],
//!     [1.0, 0.0, 1.0, 0.0],
//!     [0.0, 1.0, 0.0, 1.0],
//!     [1.0, 0.0, 1.0, 0.0],
//! ];
//! let model = GmrfModel::from_adjacency(&weights, &GmrfOptions::default()).unwrap();
//! let (d_ab, d_ba) = information_divergence(&model.covariance, &model.covariance).unwrap();
//! assert!(d_ab.abs() < 1e-9 && d_ba.abs() < 1e-9);
//! ```
//!
//! ## Architecture
//!
//! - [`gmrf`]: weighted adjacency → Laplacian, pseudoinverse, covariance
//! - [`approximation`]: Laplacian-energy node ranking and size matching
//! - [`sampler`]: multivariate Gaussian draws from a caller-owned RNG
//! - [`estimators`]: the four information-theoretic estimators
//! - [`generators`] / [`experiments`]: random graph sources and the explicit
//!   experiment registry
//!
//! Every estimator is a single-pass batch computation: inputs are read-only,
//! results are plain values, and no state is shared across calls beyond the
//! RNG the caller threads through.

pub mod approximation;
pub mod errors;
pub mod estimators;
pub mod experiments;
pub mod generators;
pub mod gmrf;
pub mod linalg;
pub mod sampler;

pub use errors::{Error, Result};
