use approx::assert_abs_diff_eq;
use netinfo::estimators::mutual_information;
use netinfo::gmrf::{GmrfModel, GmrfOptions};
use netinfo::Error;

use crate::test_helpers::{random_weighted_graph, Array2, ChaCha8Rng, SeedableRng};

#[test]
fn marginal_entropy_matches_the_gaussian_closed_form() {
    // h(N(0, I₂)) = 1 + ln(2·pi) ≈ 2.8379.
    let sigma = Array2::eye(2);
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let result = mutual_information(&sigma, &sigma, 600, 4, &mut rng).unwrap();
    assert_abs_diff_eq!(result.h_a, 2.837_877_066_409_345_4, epsilon = 1e-10);
    assert_abs_diff_eq!(result.h_b, 2.837_877_066_409_345_4, epsilon = 1e-10);
}

#[test]
fn estimate_stays_in_the_feasible_region() {
    let model_a =
        GmrfModel::from_adjacency(&random_weighted_graph(5, 31), &GmrfOptions::default()).unwrap();
    let model_b =
        GmrfModel::from_adjacency(&random_weighted_graph(4, 32), &GmrfOptions::default()).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let result = mutual_information(
        &model_a.covariance,
        &model_b.covariance,
        1_000,
        4,
        &mut rng,
    )
    .unwrap();

    assert!(result.h_a >= 0.0);
    assert!(result.h_b >= 0.0);
    assert!(result.h_ab.is_finite());
    assert!(result.mi >= 0.0, "mi = {}", result.mi);
    assert!(result.mi <= result.h_a.min(result.h_b));
    // The clamp is the only transformation applied to the raw difference.
    let raw = (result.h_a + result.h_b - result.h_ab).max(0.0);
    assert_abs_diff_eq!(
        result.mi,
        raw.min(result.h_a).min(result.h_b),
        epsilon = 1e-12
    );
}

#[test]
fn seeded_runs_are_reproducible() {
    let model =
        GmrfModel::from_adjacency(&random_weighted_graph(4, 33), &GmrfOptions::default()).unwrap();
    let mut rng_1 = ChaCha8Rng::seed_from_u64(77);
    let mut rng_2 = ChaCha8Rng::seed_from_u64(77);
    let first =
        mutual_information(&model.covariance, &model.covariance, 300, 2, &mut rng_1).unwrap();
    let second =
        mutual_information(&model.covariance, &model.covariance, 300, 2, &mut rng_2).unwrap();
    assert_eq!(first, second);
}

#[test]
fn too_small_sample_clouds_are_rejected() {
    let sigma = Array2::eye(2);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let err = mutual_information(&sigma, &sigma, 3, 5, &mut rng).unwrap_err();
    assert!(matches!(
        err,
        Error::InsufficientSamples { samples: 3, k: 5 }
    ));
}
