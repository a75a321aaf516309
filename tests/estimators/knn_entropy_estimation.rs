use approx::assert_abs_diff_eq;
use ndarray::array;
use netinfo::estimators::knn_entropy;
use netinfo::sampler::sample_multivariate_gaussian;
use netinfo::Error;
use rstest::rstest;

use crate::test_helpers::{Array1, Array2, ChaCha8Rng, SeedableRng};

#[test]
fn three_point_cloud_matches_hand_computation() {
    // Points 0, 1, 3 on the line, k = 2. The k-th neighbor radii (self
    // included at distance 0) are 1, 1, 2, so
    // h = psi(3) + psi(2) + (ln 1 + ln 1 + ln 2) / 3.
    let samples = array![[0.0], [1.0], [3.0]];
    let h = knn_entropy(samples.view(), 2).unwrap();
    assert_abs_diff_eq!(h, 1.576_617_730_383_582_6, epsilon = 1e-9);
}

#[test]
fn standard_normal_cloud_approaches_the_closed_form() {
    // h(N(0,1)) = 0.5·ln(2·pi·e) ≈ 1.4189; the KNN estimate is biased but
    // must land in the neighborhood for a few thousand samples.
    let sigma = array![[1.0]];
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let (samples, _) =
        sample_multivariate_gaussian(&Array1::zeros(1), &sigma, 4000, &mut rng).unwrap();
    let cloud = samples.t().to_owned();
    let h = knn_entropy(cloud.view(), 4).unwrap();
    assert_abs_diff_eq!(h, 1.418_938_533_204_672_7, epsilon = 0.3);
}

#[rstest]
#[case(3, 3)]
#[case(2, 5)]
#[case(4, 0)]
fn too_few_samples_are_rejected(#[case] samples: usize, #[case] k: usize) {
    let cloud = Array2::zeros((samples, 2));
    let err = knn_entropy(cloud.view(), k).unwrap_err();
    assert!(matches!(err, Error::InsufficientSamples { .. }));
}

#[test]
fn chebyshev_metric_takes_the_coordinate_maximum() {
    // Second point differs by 3 in one coordinate and 1 in the other; the
    // L∞ radius is 3 for both points at k = 2.
    let samples = array![[0.0, 0.0], [3.0, 1.0], [10.0, 10.0]];
    let h = knn_entropy(samples.view(), 2).unwrap();
    // Pairwise L∞ distances: d(0,1) = 3, d(0,2) = 10, d(1,2) = 9, so the
    // k = 2 radii are 3, 3 and 9.
    let expected = pinned_digamma(3.0)
        + pinned_digamma(2.0)
        + 2.0 * ((3.0f64.ln() + 3.0f64.ln() + 9.0f64.ln()) / 3.0);
    assert_abs_diff_eq!(h, expected, epsilon = 1e-9);
}

// psi values pinned so the test does not depend on the crate's own digamma.
fn pinned_digamma(x: f64) -> f64 {
    match x {
        v if v == 2.0 => 0.422_784_335_098_467_1,
        v if v == 3.0 => 0.922_784_335_098_467_1,
        _ => unreachable!("only psi(2) and psi(3) are pinned"),
    }
}
