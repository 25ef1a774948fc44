// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Fuzzy Entropy (FuzzyEn)
//!
//! Fuzzy entropy measures how predictable consecutive embedded patterns of a
//! time series are, using a smooth similarity instead of the hard threshold of
//! sample entropy.
//!
//! ## Definition
//!
//! For a series x of length N, embedding dimension m, delay τ and tolerance r:
//!
//! 1. Build the delay vectors X_i^k = [x_i, x_{i+τ}, ..., x_{i+(k-1)τ}] for k = m and k = m+1.
//! 2. Subtract from each vector its own mean (removes the local baseline).
//! 3. For every pair i ≠ j take the Chebyshev distance d_ij and the membership
//!    D_ij = exp(-d_ij^n / r).
//! 4. φ(k) = 1/M Σ_i [ 1/(M-1) Σ_{j≠i} D_ij ], with M the number of vectors.
//!
//! FuzzyEn = -ln( φ(m+1) / φ(m) )
//!
//! ## Multi-channel input
//!
//! Every channel is estimated with one shared tolerance, and the reported value is
//! the arithmetic mean of the per-channel values. The per-channel values are
//! exposed as the local values of the estimator.

use ndarray::{Array1, ArrayView1};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, warn};

use super::config::{ChannelPolicy, FuzzyEntropyConfig};
use super::fuzzy_utils::{derive_tolerance, embed, phi, phi_ratio_entropy};
use super::signal::{ChannelSet, SignalData};
use crate::estimators::error::{FuzzyEntropyError, Result};
use crate::estimators::traits::{GlobalValue, OptionalLocalValues};

/// Parameters used by an estimate plus the per-channel breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyEntropyInfo {
    pub dimension: usize,
    /// Delay (tau).
    pub delay: usize,
    /// Tolerance actually used, explicit or derived.
    pub tolerance: f64,
    /// Per-channel values in input channel order; `None` for single-channel input.
    pub values: Option<Array1<f64>>,
    /// Channel labels parallel to `values`; `None` for single-channel input.
    pub labels: Option<Vec<String>>,
    /// Channels skipped under [`ChannelPolicy::Partial`]. Always empty otherwise.
    pub failures: Vec<ChannelFailure>,
}

/// A channel that could not be estimated under [`ChannelPolicy::Partial`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelFailure {
    pub index: usize,
    pub label: String,
    pub error: FuzzyEntropyError,
}

/// Intermediate quantities of one channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelEstimate {
    /// φ(m)
    pub phi_m: f64,
    /// φ(m+1)
    pub phi_m1: f64,
    pub value: f64,
}

/// Fuzzy entropy estimator.
///
/// The estimate is computed when the estimator is built, so every error surfaces
/// from the constructor and the trait accessors are infallible.
///
/// # Examples
///
/// ```
/// use fuzzyen::estimators::entropy::Entropy;
/// use fuzzyen::estimators::traits::GlobalValue;
/// use ndarray::Array1;
///
/// let signal = Array1::from_iter((0..200).map(|i| (i as f64 * 0.3).sin()));
/// let fuzzyen = Entropy::new_fuzzy_default(signal).unwrap();
/// assert!(fuzzyen.global_value().is_finite());
/// assert_eq!(fuzzyen.info().dimension, 2);
/// ```
#[derive(Debug, Clone)]
pub struct FuzzyEntropy {
    pub config: FuzzyEntropyConfig,
    entropy: f64,
    info: FuzzyEntropyInfo,
    /// `None` where a channel failed under the partial policy.
    estimates: Vec<Option<ChannelEstimate>>,
    labels: Vec<String>,
}

impl FuzzyEntropy {
    /// Validate, normalize and estimate.
    pub fn new(data: impl Into<SignalData>, config: FuzzyEntropyConfig) -> Result<Self> {
        config.validate()?;
        let channel_set = ChannelSet::from_signal(data)?;
        Self::estimate(&channel_set, config)
    }

    /// Estimate on channels already normalized by [`ChannelSet::from_signal`].
    pub fn from_channel_set(channel_set: &ChannelSet, config: FuzzyEntropyConfig) -> Result<Self> {
        config.validate()?;
        Self::estimate(channel_set, config)
    }

    fn estimate(channel_set: &ChannelSet, config: FuzzyEntropyConfig) -> Result<Self> {
        let required = config.required_samples()?;
        let n_samples = channel_set.n_samples();
        if n_samples < required {
            return Err(FuzzyEntropyError::insufficient_samples(required, n_samples));
        }

        let views = channel_set.views();
        let tolerance = derive_tolerance(&views, config.tolerance)?;

        #[cfg(feature = "parallel")]
        let results: Vec<Result<ChannelEstimate>> = views
            .par_iter()
            .map(|series| estimate_channel(*series, tolerance, &config))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let results: Vec<Result<ChannelEstimate>> = views
            .iter()
            .map(|series| estimate_channel(*series, tolerance, &config))
            .collect();

        let mut estimates = Vec::with_capacity(results.len());
        let mut failures = Vec::new();
        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok(estimate) => estimates.push(Some(estimate)),
                Err(error) if config.channel_policy == ChannelPolicy::Partial => {
                    let label = channel_set
                        .labels()
                        .get(index)
                        .cloned()
                        .unwrap_or_else(|| index.to_string());
                    warn!(index, label = %label, %error, "skipping channel");
                    failures.push(ChannelFailure {
                        index,
                        label,
                        error,
                    });
                    estimates.push(None);
                }
                Err(error) => return Err(error),
            }
        }

        let succeeded: Vec<f64> = estimates.iter().flatten().map(|e| e.value).collect();
        if succeeded.is_empty() {
            // Only reachable under the partial policy: every channel failed
            return Err(failures.swap_remove(0).error);
        }
        let entropy = succeeded.iter().sum::<f64>() / succeeded.len() as f64;

        let (values, labels) = if channel_set.is_multichannel() {
            let values: Array1<f64> = estimates
                .iter()
                .map(|e| e.map_or(f64::NAN, |e| e.value))
                .collect();
            (Some(values), Some(channel_set.labels().to_vec()))
        } else {
            (None, None)
        };

        debug!(
            entropy,
            tolerance,
            channels = channel_set.n_channels(),
            failed = failures.len(),
            "fuzzy entropy estimated"
        );

        Ok(Self {
            config,
            entropy,
            info: FuzzyEntropyInfo {
                dimension: config.dimension,
                delay: config.delay,
                tolerance,
                values,
                labels,
                failures,
            },
            estimates,
            labels: channel_set.labels().to_vec(),
        })
    }

    pub fn info(&self) -> &FuzzyEntropyInfo {
        &self.info
    }

    pub fn into_parts(self) -> (f64, FuzzyEntropyInfo) {
        (self.entropy, self.info)
    }

    /// Per-channel φ(m), φ(m+1) and value, `None` for skipped channels.
    pub fn channel_estimates(&self) -> &[Option<ChannelEstimate>] {
        &self.estimates
    }

    /// `(φ(m), φ(m+1))` per channel, `None` for skipped channels.
    pub fn phi(&self) -> Vec<Option<(f64, f64)>> {
        self.estimates
            .iter()
            .map(|e| e.map(|e| (e.phi_m, e.phi_m1)))
            .collect()
    }

    /// Channel labels in input order; `["0"]` for a single series.
    pub fn channel_labels(&self) -> &[String] {
        &self.labels
    }
}

/// Run embedding, φ(m), φ(m+1) and the log-ratio for one channel.
pub fn estimate_channel(
    series: ArrayView1<'_, f64>,
    tolerance: f64,
    config: &FuzzyEntropyConfig,
) -> Result<ChannelEstimate> {
    let m = config.dimension;
    let exponent = config.membership_exponent;

    let embedded_m = embed(series, m, config.delay)?;
    let embedded_m1 = embed(series, m + 1, config.delay)?;
    let phi_m = phi(embedded_m.view(), tolerance, exponent)?;
    let phi_m1 = phi(embedded_m1.view(), tolerance, exponent)?;
    debug!(phi_m, phi_m1, "channel phi values");

    let value = phi_ratio_entropy(phi_m, phi_m1)?;
    Ok(ChannelEstimate {
        phi_m,
        phi_m1,
        value,
    })
}

/// Fuzzy entropy of a signal and the record of parameters used.
///
/// Single-channel input returns that channel's value; multi-channel input
/// returns the mean over channels with `info.values` holding each channel.
pub fn compute_fuzzy_entropy(
    data: impl Into<SignalData>,
    config: FuzzyEntropyConfig,
) -> Result<(f64, FuzzyEntropyInfo)> {
    FuzzyEntropy::new(data, config).map(FuzzyEntropy::into_parts)
}

impl GlobalValue for FuzzyEntropy {
    fn global_value(&self) -> f64 {
        self.entropy
    }
}

/// Local values are the per-channel entropies (one value for a single series).
impl OptionalLocalValues for FuzzyEntropy {
    fn supports_local(&self) -> bool {
        true
    }

    fn local_values_opt(&self) -> std::result::Result<Array1<f64>, &'static str> {
        Ok(self
            .estimates
            .iter()
            .map(|e| e.map_or(f64::NAN, |e| e.value))
            .collect())
    }
}
