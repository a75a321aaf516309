// SPDX-FileCopyrightText: 2026 netinfo contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod causality;
pub mod divergence;
pub mod fisher;
pub mod knn_entropy;
pub mod mutual_information;

pub use causality::{granger_causality_and_transfer_entropy, CausalityEstimate};
pub use divergence::information_divergence;
pub use fisher::fisher_information;
pub use knn_entropy::knn_entropy;
pub use mutual_information::{mutual_information, MutualInformation};
