// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for the fuzzy entropy estimator.

use crate::estimators::error::{FuzzyEntropyError, Result};

/// Factor applied to the standard deviation when the tolerance is derived.
pub const DEFAULT_TOLERANCE_FACTOR: f64 = 0.2;

/// Similarity tolerance `r`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Tolerance {
    /// Caller-supplied value, used unchanged.
    Explicit(f64),
    /// `0.2 * std` of the signal (sample standard deviation, pooled over channels).
    #[default]
    DeriveFromSignal,
}

impl From<f64> for Tolerance {
    fn from(r: f64) -> Self {
        Tolerance::Explicit(r)
    }
}

/// What to do when a single channel of a multi-channel signal fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelPolicy {
    /// Abort the whole estimate on the first failing channel.
    #[default]
    FailFast,
    /// Record the failure, mark the channel value as NaN and average the rest.
    Partial,
}

/// Parameters of a fuzzy entropy estimate.
///
/// ```
/// use fuzzyen::FuzzyEntropyConfig;
///
/// let config = FuzzyEntropyConfig::default()
///     .with_dimension(3)
///     .with_tolerance(0.15);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyEntropyConfig {
    /// Time delay (tau) between consecutive samples of one embedding vector.
    pub delay: usize,
    /// Embedding dimension m; order m+1 is used internally as well.
    pub dimension: usize,
    /// Explicit `r`, or derived as `0.2 * std` of the pooled channels.
    pub tolerance: Tolerance,
    /// Exponent n of the membership function `exp(-d^n / r)`.
    pub membership_exponent: f64,
    /// Abort on a failing channel, or skip it and average the rest.
    pub channel_policy: ChannelPolicy,
}

impl Default for FuzzyEntropyConfig {
    fn default() -> Self {
        Self {
            delay: 1,
            dimension: 2,
            tolerance: Tolerance::DeriveFromSignal,
            membership_exponent: 2.0,
            channel_policy: ChannelPolicy::FailFast,
        }
    }
}

impl FuzzyEntropyConfig {
    pub fn with_delay(mut self, delay: usize) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Use an explicit tolerance instead of deriving it from the signal.
    pub fn with_tolerance(mut self, tolerance: impl Into<Tolerance>) -> Self {
        self.tolerance = tolerance.into();
        self
    }

    pub fn with_membership_exponent(mut self, exponent: f64) -> Self {
        self.membership_exponent = exponent;
        self
    }

    pub fn with_channel_policy(mut self, policy: ChannelPolicy) -> Self {
        self.channel_policy = policy;
        self
    }

    /// Check every field without looking at any data.
    ///
    /// Out-of-range values are rejected, never clamped.
    pub fn validate(&self) -> Result<()> {
        if self.delay < 1 {
            return Err(FuzzyEntropyError::invalid_parameter(
                "delay must be a positive integer",
            ));
        }
        if self.dimension < 1 {
            return Err(FuzzyEntropyError::invalid_parameter(
                "dimension must be a positive integer",
            ));
        }
        if !(self.membership_exponent.is_finite() && self.membership_exponent > 0.0) {
            return Err(FuzzyEntropyError::invalid_parameter(format!(
                "membership exponent must be positive and finite, got {}",
                self.membership_exponent
            )));
        }
        if let Tolerance::Explicit(r) = self.tolerance {
            if !(r.is_finite() && r > 0.0) {
                return Err(FuzzyEntropyError::invalid_tolerance(r));
            }
        }
        Ok(())
    }

    /// Minimum channel length: order m+1 must yield at least two vectors.
    pub fn required_samples(&self) -> Result<usize> {
        self.dimension
            .checked_mul(self.delay)
            .and_then(|span| span.checked_add(2))
            .ok_or_else(|| {
                FuzzyEntropyError::invalid_parameter("dimension * delay overflows usize")
            })
    }
}
