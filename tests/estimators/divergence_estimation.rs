use approx::assert_abs_diff_eq;
use ndarray::array;
use netinfo::estimators::information_divergence;
use netinfo::gmrf::{GmrfModel, GmrfOptions};
use netinfo::Error;

use crate::test_helpers::{cycle4, random_weighted_graph, Array2};

#[test]
fn diagonal_covariances_match_the_closed_form() {
    // Σ_a = 2I, Σ_b = I in two dimensions:
    // d_ab = 0.5·(4 − 2 + ln(1/4)) = 1 − ln 2,
    // d_ba = 0.5·(1 − 2 + ln 4) = ln 2 − 1/2.
    let sigma_a = array![[2.0, 0.0], [0.0, 2.0]];
    let sigma_b = array![[1.0, 0.0], [0.0, 1.0]];
    let (d_ab, d_ba) = information_divergence(&sigma_a, &sigma_b).unwrap();
    assert_abs_diff_eq!(d_ab, 1.0 - 2.0f64.ln(), epsilon = 1e-10);
    assert_abs_diff_eq!(d_ba, 2.0f64.ln() - 0.5, epsilon = 1e-10);
}

#[test]
fn self_divergence_is_zero() {
    let model = GmrfModel::from_adjacency(&cycle4(), &GmrfOptions::default()).unwrap();
    let (d_ab, d_ba) = information_divergence(&model.covariance, &model.covariance).unwrap();
    assert_abs_diff_eq!(d_ab, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(d_ba, 0.0, epsilon = 1e-9);
}

#[test]
fn both_directions_are_nonnegative_for_gmrf_covariances() {
    let model_a =
        GmrfModel::from_adjacency(&random_weighted_graph(6, 17), &GmrfOptions::default()).unwrap();
    let model_b =
        GmrfModel::from_adjacency(&random_weighted_graph(6, 18), &GmrfOptions::default()).unwrap();
    let (d_ab, d_ba) =
        information_divergence(&model_a.covariance, &model_b.covariance).unwrap();
    assert!(d_ab >= 0.0, "d_ab = {d_ab}");
    assert!(d_ba >= 0.0, "d_ba = {d_ba}");
}

#[test]
fn negative_eigenvalue_ratio_yields_nan() {
    // Σ_b has eigenvalues 5 and -1, so the sorted ratio product is negative
    // and the log is NaN rather than silently corrected.
    let sigma_a = array![[1.0, 0.0], [0.0, 1.0]];
    let sigma_b = array![[2.0, 3.0], [3.0, 2.0]];
    let (d_ab, d_ba) = information_divergence(&sigma_a, &sigma_b).unwrap();
    assert!(d_ab.is_nan());
    assert!(d_ba.is_nan());
}

#[test]
fn mismatched_dimensions_are_rejected() {
    let sigma_a = Array2::eye(3);
    let sigma_b = Array2::eye(4);
    let err = information_divergence(&sigma_a, &sigma_b).unwrap_err();
    assert!(matches!(
        err,
        Error::DimensionMismatch {
            expected: 3,
            found: 4
        }
    ));
}
