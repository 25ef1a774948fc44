use fuzzyen::estimators::approaches::fuzzy::FuzzyEntropyConfig;
use fuzzyen::estimators::entropy::{Entropy, GlobalValue};
use ndarray::Array1;
use rand::prelude::*;
use rand_distr::{Distribution, Normal};
use std::f64::consts::PI;

fn main() {
    // 2 seconds of a 5 Hz sine sampled at 500 Hz
    let sine = Array1::from_iter((0..1000).map(|i| (2.0 * PI * 5.0 * i as f64 / 500.0).sin()));

    // Gaussian white noise of the same length
    let mut rng = StdRng::seed_from_u64(7);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let noise = Array1::from_iter((0..1000).map(|_| normal.sample(&mut rng)));

    let sine_entropy = Entropy::new_fuzzy_default(sine.clone()).unwrap();
    let noise_entropy = Entropy::new_fuzzy_default(noise).unwrap();

    println!("Sine  FuzzyEn: {}", sine_entropy.global_value());
    println!("Noise FuzzyEn: {}", noise_entropy.global_value());
    println!("Parameters used for the sine: {:?}", sine_entropy.info());

    // Explicit tolerance, larger dimension and delay
    let config = FuzzyEntropyConfig::default()
        .with_dimension(3)
        .with_delay(2)
        .with_tolerance(0.15);
    match Entropy::new_fuzzy(sine, config) {
        Ok(estimator) => println!("Sine FuzzyEn (m=3, tau=2, r=0.15): {}", estimator.global_value()),
        Err(err) => eprintln!("Estimation failed: {err}"),
    }
}
