// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Building blocks of the fuzzy entropy estimator.
//!
//! Each function is one stage of the pipeline:
//! tolerance derivation, delay embedding, mean-centering, fuzzy similarity
//! ("phi") and the log-ratio reduction.

use ndarray::{Array2, ArrayView1, ArrayView2, Axis, concatenate};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, warn};

use super::config::{DEFAULT_TOLERANCE_FACTOR, Tolerance};
use crate::estimators::error::{FuzzyEntropyError, Result};

/// Sample standard deviation (N-1 denominator) of all channels pooled together.
///
/// Returns NaN when fewer than two samples are available.
pub fn sample_std(channels: &[ArrayView1<'_, f64>]) -> f64 {
    let n: usize = channels.iter().map(|c| c.len()).sum();
    if n < 2 {
        return f64::NAN;
    }
    match concatenate(Axis(0), channels) {
        Ok(pooled) => pooled.std(1.0),
        Err(_) => f64::NAN,
    }
}

/// Resolve the tolerance `r` shared by all channels.
///
/// An explicit value is returned unchanged; otherwise `r = 0.2 * sample_std`.
/// A constant signal therefore derives `r = 0` and fails with `InvalidTolerance`.
pub fn derive_tolerance(channels: &[ArrayView1<'_, f64>], tolerance: Tolerance) -> Result<f64> {
    let r = match tolerance {
        Tolerance::Explicit(r) => r,
        Tolerance::DeriveFromSignal => {
            let r = DEFAULT_TOLERANCE_FACTOR * sample_std(channels);
            debug!(tolerance = r, "derived tolerance from signal");
            r
        }
    };
    if !(r.is_finite() && r > 0.0) {
        return Err(FuzzyEntropyError::invalid_tolerance(r));
    }
    Ok(r)
}

/// Time-delay embedding of order `order` with delay `delay`.
///
/// Row `i` is `[x[i], x[i + delay], ..., x[i + (order - 1) * delay]]`, giving
/// `N - (order - 1) * delay` rows.
pub fn embed(series: ArrayView1<'_, f64>, order: usize, delay: usize) -> Result<Array2<f64>> {
    if order < 1 {
        return Err(FuzzyEntropyError::invalid_parameter(
            "embedding order must be a positive integer",
        ));
    }
    if delay < 1 {
        return Err(FuzzyEntropyError::invalid_parameter(
            "delay must be a positive integer",
        ));
    }
    let span = (order - 1)
        .checked_mul(delay)
        .ok_or_else(|| FuzzyEntropyError::invalid_parameter("(order - 1) * delay overflows"))?;

    let n = series.len();
    if n <= span {
        return Err(FuzzyEntropyError::insufficient_samples(span + 1, n));
    }
    let n_vectors = n - span;
    Ok(Array2::from_shape_fn((n_vectors, order), |(i, j)| {
        series[i + j * delay]
    }))
}

/// Subtract each row's own mean from that row.
pub fn center_rows(embedded: &mut Array2<f64>) {
    for mut row in embedded.rows_mut() {
        if let Some(mean) = row.mean() {
            row.mapv_inplace(|x| x - mean);
        }
    }
}

/// Chebyshev (L-infinity) distance.
#[inline]
pub fn chebyshev(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .fold(0.0_f64, |max, (x, y)| max.max((x - y).abs()))
}

/// Fuzzy membership `exp(-(distance^exponent) / r)`, in (0, 1].
///
/// Underflow to exactly 0.0 for distant pairs is expected.
#[inline]
pub fn membership(distance: f64, r: f64, exponent: f64) -> f64 {
    let powered = if exponent.fract() == 0.0 && exponent <= i32::MAX as f64 {
        distance.powi(exponent as i32)
    } else {
        distance.powf(exponent)
    };
    #[cfg(feature = "fast_exp")]
    let value = fast_exp(-powered / r);
    #[cfg(not(feature = "fast_exp"))]
    let value = (-powered / r).exp();
    value
}

/// Fast approximation of the exponential function for non-positive arguments.
#[cfg(feature = "fast_exp")]
pub fn fast_exp(x: f64) -> f64 {
    if x < -700.0 {
        return 0.0;
    }
    if x > 700.0 {
        return f64::INFINITY;
    }

    // 5th-order Taylor series near zero
    if x > -0.5 {
        return 1.0
            + x * (1.0 + x * (0.5 + x * (1.0 / 6.0 + x * (1.0 / 24.0 + x * (1.0 / 120.0)))));
    }

    // exp(x) ≈ 1 / (1 - x + x²/2 - x³/6)
    if x > -2.5 {
        return 1.0 / (1.0 - x + x * x / 2.0 - x * x * x / 6.0);
    }

    // exp(x) ≈ 1 / (1 - x + x²/2 - x³/6 + x⁴/24 - x⁵/120 + x⁶/720)
    1.0 / (1.0 - x + x * x / 2.0 - x * x * x / 6.0 + x * x * x * x / 24.0
        - x * x * x * x * x / 120.0
        + x * x * x * x * x * x / 720.0)
}

/// Mean membership of row `i` to every other row of `centered`.
fn similarity_degree(centered: ArrayView2<'_, f64>, i: usize, r: f64, exponent: f64) -> f64 {
    let xi = centered.row(i);
    let total: f64 = centered
        .outer_iter()
        .enumerate()
        .filter(|(j, _)| *j != i)
        .map(|(_, xj)| membership(chebyshev(xi, xj), r, exponent))
        .sum();
    total / (centered.nrows() - 1) as f64
}

/// Average fuzzy similarity among all vectors of an embedding matrix.
///
/// Rows are mean-centered first; each row's degree is its mean membership to
/// the other rows, and phi is the mean of those degrees. Degrees are always
/// summed in row order, so the result does not depend on the `parallel` feature.
///
/// Fewer than two rows leaves phi undefined and yields `InsufficientSamples`.
pub fn phi(embedded: ArrayView2<'_, f64>, r: f64, exponent: f64) -> Result<f64> {
    let n = embedded.nrows();
    if n < 2 {
        return Err(FuzzyEntropyError::insufficient_samples(2, n));
    }
    let mut centered = embedded.to_owned();
    center_rows(&mut centered);
    let view = centered.view();

    #[cfg(feature = "parallel")]
    let degrees: Vec<f64> = (0..n)
        .into_par_iter()
        .map(|i| similarity_degree(view, i, r, exponent))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let degrees: Vec<f64> = (0..n)
        .map(|i| similarity_degree(view, i, r, exponent))
        .collect();

    Ok(degrees.iter().sum::<f64>() / n as f64)
}

/// `-ln(phi(m+1) / phi(m))`.
///
/// phi(m) = 0 is an error; phi(m+1) = 0 gives `f64::INFINITY` (maximal irregularity).
pub fn phi_ratio_entropy(phi_m: f64, phi_m1: f64) -> Result<f64> {
    if phi_m == 0.0 {
        return Err(FuzzyEntropyError::degenerate(
            "phi(m) is zero, every similarity underflowed",
        ));
    }
    if phi_m1 == 0.0 {
        warn!(phi_m, "phi(m+1) is zero, fuzzy entropy is infinite");
        return Ok(f64::INFINITY);
    }
    // ln(phi_m / phi_m1) rather than -ln(phi_m1 / phi_m): no -0.0 for equal phis
    Ok((phi_m / phi_m1).ln())
}
