use netinfo::experiments::{
    compare_random_networks, find_experiment, registry, ExperimentConfig,
};
use netinfo::gmrf::GmrfOptions;

use crate::test_helpers::{ChaCha8Rng, SeedableRng};

/// Scaled-down configuration whose graphs are connected by construction:
/// network A is a pure ring lattice (no rewiring), network B is complete.
fn tiny_config() -> ExperimentConfig {
    ExperimentConfig {
        nodes_a: 8,
        lattice_neighbors: 3,
        rewire_beta: 0.0,
        nodes_b: 6,
        edge_probability: 1.0,
        weight_lo: 1.0,
        weight_hi: 2.0,
        gmrf: GmrfOptions::default(),
        sample_num: 150,
        k: 2,
        rand_partition_num: 3,
        theta_dims: 3,
        theta_observations: 4,
    }
}

#[test]
fn registry_resolves_known_names_only() {
    assert_eq!(registry().len(), 1);
    assert_eq!(registry()[0].0, "random_network");
    assert!(find_experiment("random_network").is_some());
    assert!(find_experiment("no_such_experiment").is_none());
}

#[test]
fn pipeline_produces_a_consistent_comparison() {
    let config = tiny_config();
    let mut rng = ChaCha8Rng::seed_from_u64(1234);
    let comparison = compare_random_networks(&config, &mut rng).unwrap();

    assert!(comparison.divergence_ab.is_finite());
    assert!(comparison.divergence_ba.is_finite());
    assert!(comparison.divergence_ab >= 0.0);
    assert!(comparison.divergence_ba >= 0.0);

    let mi = &comparison.mutual_information;
    assert!(mi.mi >= 0.0);
    assert!(mi.mi <= mi.h_a.min(mi.h_b));

    // Theta rows span theta_dims columns; the pair axis is at most
    // theta_observations - 1 after deduplication.
    let (pairs, rows, cols) = comparison.fisher.dim();
    assert!(pairs < config.theta_observations);
    assert_eq!(rows, config.theta_dims);
    assert_eq!(cols, config.theta_dims);
    assert!(comparison.fisher.iter().all(|v| v.is_finite()));

    assert_eq!(
        comparison.causality_ab.granger_vec.len(),
        config.rand_partition_num
    );
    assert_eq!(
        comparison.causality_ba.transfer_entropy_vec.len(),
        config.rand_partition_num
    );
    assert!(comparison.causality_ab.granger_causality.is_finite());
    assert!(comparison.causality_ba.granger_causality.is_finite());

    // A was reduced from 8 to 6 nodes, so some structural energy was lost.
    assert!(comparison.gamma > 0.0 && comparison.gamma < 1.0);
}

#[test]
fn registered_callable_matches_the_direct_call() {
    let config = tiny_config();
    let run = find_experiment("random_network").unwrap();

    let mut rng_direct = ChaCha8Rng::seed_from_u64(99);
    let direct = compare_random_networks(&config, &mut rng_direct).unwrap();
    let mut rng_registry = ChaCha8Rng::seed_from_u64(99);
    let via_registry = run(&config, &mut rng_registry).unwrap();

    assert_eq!(direct.divergence_ab, via_registry.divergence_ab);
    assert_eq!(direct.mutual_information, via_registry.mutual_information);
    assert_eq!(
        direct.causality_ab.granger_vec,
        via_registry.causality_ab.granger_vec
    );
    assert_eq!(direct.gamma, via_registry.gamma);
}
