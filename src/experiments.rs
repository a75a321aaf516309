// SPDX-FileCopyrightText: 2026 netinfo contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end comparison pipeline and the experiment registry.
//!
//! Experiments are plain callables looked up by name in an explicit registry,
//! so there is no runtime module-path dispatch. Every experiment receives a
//! configuration structure and a caller-owned RNG.

use ndarray::{Array2, Array3, Axis};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use rand_distr::{Distribution, Normal};

use crate::approximation::match_network_sizes;
use crate::errors::Result;
use crate::estimators::causality::{granger_causality_and_transfer_entropy, CausalityEstimate};
use crate::estimators::divergence::information_divergence;
use crate::estimators::fisher::fisher_information;
use crate::estimators::mutual_information::{mutual_information, MutualInformation};
use crate::generators::{erdos_renyi, random_edge_weights, watts_strogatz};
use crate::gmrf::{GmrfModel, GmrfOptions};
use crate::linalg;

/// Parameters of the random-network comparison experiment. Defaults mirror
/// the reference driver; tests scale them down.
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    /// Watts–Strogatz network A: node count, lattice neighbors, rewiring.
    pub nodes_a: usize,
    pub lattice_neighbors: usize,
    pub rewire_beta: f64,
    /// Erdős–Rényi network B: node count, edge probability.
    pub nodes_b: usize,
    pub edge_probability: f64,
    /// Uniform edge-weight range applied to both networks.
    pub weight_lo: f64,
    pub weight_hi: f64,
    /// GMRF construction options shared by both networks.
    pub gmrf: GmrfOptions,
    /// Sampling and KNN parameters of the non-parametric estimators.
    pub sample_num: usize,
    pub k: usize,
    pub rand_partition_num: usize,
    /// Fisher theta ensemble: parameter dimensions and observation count.
    pub theta_dims: usize,
    pub theta_observations: usize,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            nodes_a: 300,
            lattice_neighbors: 15,
            rewire_beta: 0.5,
            nodes_b: 500,
            edge_probability: 0.2,
            weight_lo: 1.0,
            weight_hi: 10.0,
            gmrf: GmrfOptions::default(),
            sample_num: 5000,
            k: 2,
            rand_partition_num: 20,
            theta_dims: 10,
            theta_observations: 100,
        }
    }
}

/// Everything the comparison pipeline produces.
#[derive(Debug, Clone)]
pub struct NetworkComparison {
    pub divergence_ab: f64,
    pub divergence_ba: f64,
    pub mutual_information: MutualInformation,
    pub fisher: Array3<f64>,
    pub causality_ab: CausalityEstimate,
    pub causality_ba: CausalityEstimate,
    /// Structural energy retained by the size approximation (1 when the
    /// networks already agree in size).
    pub gamma: f64,
}

/// Generate two weighted random networks and run all four estimators.
///
/// Divergence is computed on the size-matched covariances; mutual
/// information and causality work on the original ones (their sample clouds
/// concatenate, so unequal sizes are fine).
pub fn compare_random_networks(
    config: &ExperimentConfig,
    rng: &mut impl Rng,
) -> Result<NetworkComparison> {
    let adjacency_a = watts_strogatz(
        config.nodes_a,
        config.lattice_neighbors,
        config.rewire_beta,
        rng,
    );
    let weights_a = random_edge_weights(&adjacency_a, config.weight_lo, config.weight_hi, rng);
    let adjacency_b = erdos_renyi(config.nodes_b, config.edge_probability, rng);
    let weights_b = random_edge_weights(&adjacency_b, config.weight_lo, config.weight_hi, rng);

    let model_a = GmrfModel::from_adjacency(&weights_a, &config.gmrf)?;
    let model_b = GmrfModel::from_adjacency(&weights_b, &config.gmrf)?;

    let matched = match_network_sizes(&weights_a, &weights_b, &model_a, &model_b)?;
    log::info!(
        "size matching: {} vs {} nodes, gamma = {:.4}",
        config.nodes_a,
        config.nodes_b,
        matched.gamma
    );

    let (divergence_ab, divergence_ba) =
        information_divergence(&matched.model_a.covariance, &matched.model_b.covariance)?;

    let mi = mutual_information(
        &model_a.covariance,
        &model_b.covariance,
        config.sample_num,
        config.k,
        rng,
    )?;

    let (sigma_ensemble, theta_matrix) = fisher_ensemble(&weights_a, &weights_b, config, rng)?;
    let fisher = fisher_information(&sigma_ensemble, &theta_matrix)?;

    let causality_ab = granger_causality_and_transfer_entropy(
        &model_a.covariance,
        &model_b.covariance,
        config.sample_num,
        config.rand_partition_num,
        config.k,
        rng,
    )?;
    let causality_ba = granger_causality_and_transfer_entropy(
        &model_b.covariance,
        &model_a.covariance,
        config.sample_num,
        config.rand_partition_num,
        config.k,
        rng,
    )?;

    Ok(NetworkComparison {
        divergence_ab,
        divergence_ba,
        mutual_information: mi,
        fisher,
        causality_ab,
        causality_ba,
        gamma: matched.gamma,
    })
}

/// Build the matched (Σ ensemble, θ matrix) pair for the Fisher estimator.
///
/// Theta rows are degrees of random node subsets of network B, sorted
/// lexicographically and deduplicated so each row is unique and ordered as
/// the Fisher contract requires; one covariance of a noise-reweighted
/// network A is built per surviving row.
fn fisher_ensemble(
    weights_a: &Array2<f64>,
    weights_b: &Array2<f64>,
    config: &ExperimentConfig,
    rng: &mut impl Rng,
) -> Result<(Vec<Array2<f64>>, Array2<f64>)> {
    let degrees_b = weights_b.sum_axis(Axis(0));
    let n_b = weights_b.nrows();
    let dims = config.theta_dims.min(n_b);

    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(config.theta_observations);
    for _ in 0..config.theta_observations {
        let mut nodes: Vec<usize> = (0..n_b).collect();
        nodes.shuffle(rng);
        rows.push(nodes[..dims].iter().map(|&i| degrees_b[i]).collect());
    }
    rows.sort_by(|a, b| {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| x.total_cmp(y))
            .find(|o| o.is_ne())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rows.dedup();

    let mut theta_matrix = Array2::zeros((rows.len(), dims));
    for (i, row) in rows.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            theta_matrix[[i, j]] = value;
        }
    }

    let mut sigma_ensemble = Vec::with_capacity(rows.len());
    for row in &rows {
        let scale = row.iter().sum::<f64>() / dims as f64;
        let normal = Normal::new(0.0, scale.abs()).expect("finite noise scale");
        let base = Array2::from_shape_fn(weights_a.dim(), |_| {
            let draw: f64 = normal.sample(rng);
            draw.abs()
        });
        let reweighted = weights_a * &linalg::symmetric_with_zero_diagonal(&base);
        let model = GmrfModel::from_adjacency(&reweighted, &GmrfOptions::default())?;
        sigma_ensemble.push(model.covariance);
    }
    Ok((sigma_ensemble, theta_matrix))
}

/// Experiment callable: configuration plus a caller-owned RNG.
pub type ExperimentFn = fn(&ExperimentConfig, &mut dyn RngCore) -> Result<NetworkComparison>;

fn run_random_network(
    config: &ExperimentConfig,
    mut rng: &mut dyn RngCore,
) -> Result<NetworkComparison> {
    compare_random_networks(config, &mut rng)
}

const REGISTRY: &[(&str, ExperimentFn)] = &[("random_network", run_random_network)];

/// Explicit experiment registry: identifier to callable.
pub fn registry() -> &'static [(&'static str, ExperimentFn)] {
    REGISTRY
}

/// Look an experiment up by its registry name.
pub fn find_experiment(name: &str) -> Option<ExperimentFn> {
    registry()
        .iter()
        .find(|(id, _)| *id == name)
        .map(|&(_, f)| f)
}
