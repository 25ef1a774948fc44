use approx::assert_abs_diff_eq;
use fuzzyen::estimators::approaches::fuzzy::{FuzzyEntropyConfig, Tolerance, compute_fuzzy_entropy};
use fuzzyen::estimators::entropy::Entropy;
use fuzzyen::estimators::error::FuzzyEntropyError;
use fuzzyen::estimators::traits::{GlobalValue, OptionalLocalValues};
use ndarray::{Array1, array};
use rstest::rstest;

use crate::test_helpers::{
    assert_entropy_values_close, generate_gaussian_noise, generate_sine, generate_uniform_noise,
    manual_sample_std,
};

#[cfg(not(feature = "fast_exp"))]
#[test]
fn fuzzy_entropy_hand_computed() {
    // m=2: phi(2) = (8 + 12 e^-1) / 20 (see phi_hand_computed)
    // m=3: rows alternate [1,2,1],[2,1,2]; centered distance 4/3, so each of the
    //      4 rows has degree (1 + 2 f) / 3 with f = exp(-16/9)
    let series = array![1.0, 2.0, 1.0, 2.0, 1.0, 2.0];
    let e = (-1.0_f64).exp();
    let f = (-16.0_f64 / 9.0).exp();
    let phi2 = (8.0 + 12.0 * e) / 20.0;
    let phi3 = (1.0 + 2.0 * f) / 3.0;

    let config = FuzzyEntropyConfig::default().with_tolerance(1.0);
    let (entropy, info) = compute_fuzzy_entropy(series, config).unwrap();
    assert_entropy_values_close(entropy, -(phi3 / phi2).ln(), 1e-13, 1e-12, "hand_computed");
    assert_eq!(info.tolerance, 1.0);
    assert_eq!(info.dimension, 2);
    assert_eq!(info.delay, 1);
    assert!(info.values.is_none());
}

#[test]
fn fuzzy_entropy_is_deterministic() {
    let series = generate_gaussian_noise(300, 0.0, 1.0, 11);
    let config = FuzzyEntropyConfig::default().with_dimension(3).with_delay(2);
    let (a, info_a) = compute_fuzzy_entropy(series.clone(), config).unwrap();
    let (b, info_b) = compute_fuzzy_entropy(series, config).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
    assert_eq!(info_a, info_b);
}

#[test]
fn default_tolerance_is_point_two_sample_std() {
    let series = generate_uniform_noise(400, 5);
    let (_, info) = compute_fuzzy_entropy(series.clone(), FuzzyEntropyConfig::default()).unwrap();
    let expected = 0.2 * manual_sample_std(series.as_slice().unwrap());
    assert!((info.tolerance - expected).abs() <= 1e-9 * expected);
}

#[test]
fn constant_signal_without_tolerance_fails() {
    let constant = Array1::from_elem(100, 3.5);
    let err = compute_fuzzy_entropy(constant, FuzzyEntropyConfig::default()).unwrap_err();
    assert_eq!(err, FuzzyEntropyError::invalid_tolerance(0.0));
}

#[test]
fn constant_signal_with_explicit_tolerance_is_zero() {
    let constant = Array1::from_elem(100, 3.5);
    let estimator =
        Entropy::new_fuzzy(constant, FuzzyEntropyConfig::default().with_tolerance(0.2)).unwrap();
    let estimate = estimator.channel_estimates()[0].unwrap();
    assert_eq!(estimate.phi_m, 1.0);
    assert_eq!(estimate.phi_m1, 1.0);
    assert_eq!(estimator.global_value(), 0.0);
    assert!(estimator.global_value().is_sign_positive());
}

#[test]
fn linear_trend_is_fully_regular() {
    // Mean-centering removes the local baseline, so every window of a ramp is identical
    let ramp: Array1<f64> = (0..60).map(|i| i as f64).collect();
    let config = FuzzyEntropyConfig::default().with_tolerance(0.1);
    let (entropy, _) = compute_fuzzy_entropy(ramp, config).unwrap();
    assert_eq!(entropy, 0.0);
    assert!(entropy.is_sign_positive());
}

#[test]
fn short_signal_boundary() {
    // dimension=2, delay=3: order 3 needs N - 6 vectors
    let config = FuzzyEntropyConfig::default().with_delay(3);
    let values = [1.0, 3.0, 2.0, 5.0, 4.0, 7.0, 6.0, 9.0];

    // N = 6 => no order-3 vector
    let err = compute_fuzzy_entropy(values[..6].to_vec(), config).unwrap_err();
    assert_eq!(err, FuzzyEntropyError::insufficient_samples(8, 6));

    // N = 7 => a single order-3 vector, no peer to compare against
    let err = compute_fuzzy_entropy(values[..7].to_vec(), config).unwrap_err();
    assert_eq!(err, FuzzyEntropyError::insufficient_samples(8, 7));

    // N = 8 => two vectors
    let (entropy, _) = compute_fuzzy_entropy(values.to_vec(), config).unwrap();
    assert!(entropy.is_finite());
}

#[test]
fn empty_signal_is_insufficient() {
    let err = compute_fuzzy_entropy(Vec::<f64>::new(), FuzzyEntropyConfig::default()).unwrap_err();
    assert_eq!(err, FuzzyEntropyError::insufficient_samples(4, 0));
}

#[test]
fn random_signal_is_more_irregular_than_sine() {
    let noise = generate_uniform_noise(500, 42);
    let sine = generate_sine(500, 5.0, 500.0);
    let (h_noise, _) = compute_fuzzy_entropy(noise, FuzzyEntropyConfig::default()).unwrap();
    let (h_sine, _) = compute_fuzzy_entropy(sine, FuzzyEntropyConfig::default()).unwrap();
    println!("noise={h_noise}, sine={h_sine}");
    assert!(h_noise > h_sine);
}

#[rstest]
#[case(FuzzyEntropyConfig::default().with_dimension(0))]
#[case(FuzzyEntropyConfig::default().with_delay(0))]
#[case(FuzzyEntropyConfig::default().with_membership_exponent(0.0))]
#[case(FuzzyEntropyConfig::default().with_membership_exponent(-2.0))]
#[case(FuzzyEntropyConfig::default().with_membership_exponent(f64::NAN))]
fn invalid_parameters_are_rejected(#[case] config: FuzzyEntropyConfig) {
    let series = generate_uniform_noise(100, 1);
    let err = compute_fuzzy_entropy(series, config).unwrap_err();
    assert!(matches!(err, FuzzyEntropyError::InvalidParameter { .. }), "{err}");
}

#[rstest]
#[case(-1.0)]
#[case(0.0)]
#[case(f64::INFINITY)]
fn invalid_tolerances_are_rejected(#[case] tolerance: f64) {
    let series = generate_uniform_noise(100, 1);
    let config = FuzzyEntropyConfig::default().with_tolerance(tolerance);
    let err = compute_fuzzy_entropy(series, config).unwrap_err();
    assert_eq!(err, FuzzyEntropyError::invalid_tolerance(tolerance));
}

#[test]
fn nan_tolerance_is_rejected() {
    let series = generate_uniform_noise(100, 1);
    let config = FuzzyEntropyConfig::default().with_tolerance(Tolerance::Explicit(f64::NAN));
    let err = compute_fuzzy_entropy(series, config).unwrap_err();
    assert!(matches!(err, FuzzyEntropyError::InvalidTolerance { .. }));
}

#[test]
fn vanishing_phi_m1_gives_infinity() {
    // dimension 1: every order-1 window centers to 0, so phi(1) = 1.
    // Order-2 windows differ by distinct steps and underflow with a tiny tolerance.
    let series = vec![0.0, 1.0, 3.0, 6.0, 10.0];
    let config = FuzzyEntropyConfig::default()
        .with_dimension(1)
        .with_tolerance(1e-300);
    let estimator = Entropy::new_fuzzy(series, config).unwrap();
    let estimate = estimator.channel_estimates()[0].unwrap();
    assert_eq!(estimate.phi_m, 1.0);
    assert_eq!(estimate.phi_m1, 0.0);
    assert_eq!(estimator.global_value(), f64::INFINITY);
}

#[test]
fn vanishing_phi_m_is_degenerate() {
    let squares: Vec<f64> = (0..8).map(|i| (i * i) as f64).collect();
    let config = FuzzyEntropyConfig::default().with_tolerance(1e-300);
    let err = compute_fuzzy_entropy(squares, config).unwrap_err();
    assert!(matches!(err, FuzzyEntropyError::DegenerateComputation { .. }));
}

#[test]
fn membership_exponent_changes_the_estimate() {
    let series = generate_gaussian_noise(200, 0.0, 1.0, 9);
    let (h2, _) = compute_fuzzy_entropy(series.clone(), FuzzyEntropyConfig::default()).unwrap();
    let (h1, _) = compute_fuzzy_entropy(
        series,
        FuzzyEntropyConfig::default().with_membership_exponent(1.0),
    )
    .unwrap();
    assert!(h1.is_finite() && h2.is_finite());
    assert_ne!(h1, h2);
}

#[test]
fn single_channel_local_values() {
    let series = generate_gaussian_noise(150, 0.0, 1.0, 21);
    let estimator = Entropy::new_fuzzy_default(series).unwrap();
    assert!(estimator.supports_local());
    let local = estimator.local_values_opt().unwrap();
    assert_eq!(local.len(), 1);
    assert_abs_diff_eq!(local[0], estimator.global_value(), epsilon = 0.0);
}

#[test]
fn factory_matches_free_function() {
    let series = generate_uniform_noise(120, 8);
    let config = FuzzyEntropyConfig::default().with_dimension(3);
    let estimator = Entropy::new_fuzzy(series.clone(), config).unwrap();
    let (entropy, info) = compute_fuzzy_entropy(series, config).unwrap();
    assert_eq!(estimator.global_value(), entropy);
    assert_eq!(estimator.info(), &info);
}
