use fuzzyen::{ChannelPolicy, FuzzyEntropyConfig, compute_fuzzy_entropy};
use ndarray::{Array1, Array2};
use rand::prelude::*;

fn main() {
    // 3 channels, rows are samples and columns are channels
    let mut rng = StdRng::seed_from_u64(3);
    let data = Array2::from_shape_fn((600, 3), |(i, c)| match c {
        0 => (i as f64 * 0.05).sin(),
        1 => (i as f64 * 0.05).sin() + 0.3 * rng.gen_range(-1.0..1.0),
        _ => rng.gen_range(-1.0..1.0),
    });

    let (entropy, info) = compute_fuzzy_entropy(data, FuzzyEntropyConfig::default()).unwrap();
    println!("Mean FuzzyEn: {entropy}");
    println!("Shared tolerance: {}", info.tolerance);
    if let (Some(labels), Some(values)) = (&info.labels, &info.values) {
        for (label, value) in labels.iter().zip(values.iter()) {
            println!("  channel {label}: {value}");
        }
    }

    // Labeled channels, skipping any channel that cannot be estimated
    let columns = vec![
        ("ramp".to_string(), Array1::from_iter((0..200).map(|i| i as f64))),
        ("noise".to_string(), Array1::from_iter((0..200).map(|_| rng.gen_range(-1.0..1.0)))),
    ];
    let config = FuzzyEntropyConfig::default().with_channel_policy(ChannelPolicy::Partial);
    match compute_fuzzy_entropy(columns, config) {
        Ok((entropy, info)) => {
            println!("Labeled mean FuzzyEn: {entropy}");
            for failure in &info.failures {
                println!("  skipped {}: {}", failure.label, failure.error);
            }
        }
        Err(err) => eprintln!("Estimation failed: {err}"),
    }
}
