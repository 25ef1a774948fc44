// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for fuzzy entropy estimation.

use thiserror::Error;

/// Errors that can occur while estimating fuzzy entropy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuzzyEntropyError {
    /// Tolerance supplied or derived is not a positive finite number.
    #[error("Invalid tolerance: {value} (must be positive and finite)")]
    InvalidTolerance {
        /// The rejected tolerance value
        value: f64,
    },

    /// Delay, dimension or membership exponent out of range.
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of what's wrong with the parameter
        message: String,
    },

    /// Channels with inconsistent lengths or non-numeric content.
    #[error("Shape mismatch: {message}")]
    ShapeMismatch {
        /// Description of the offending input
        message: String,
    },

    /// Signal too short to form the embedding vectors needed.
    #[error("Insufficient samples: required {required}, actual {actual}")]
    InsufficientSamples {
        /// Minimum number of samples (or vectors) needed
        required: usize,
        /// Number actually available
        actual: usize,
    },

    /// phi(m) is zero, the ratio phi(m+1)/phi(m) is undefined.
    #[error("Degenerate computation: {message}")]
    DegenerateComputation {
        /// Description of the degenerate quantity
        message: String,
    },
}

impl FuzzyEntropyError {
    /// Create an InvalidTolerance error.
    pub fn invalid_tolerance(value: f64) -> Self {
        Self::InvalidTolerance { value }
    }

    /// Create an InvalidParameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create a ShapeMismatch error.
    pub fn shape_mismatch(message: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            message: message.into(),
        }
    }

    /// Create an InsufficientSamples error.
    pub fn insufficient_samples(required: usize, actual: usize) -> Self {
        Self::InsufficientSamples { required, actual }
    }

    /// Create a DegenerateComputation error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateComputation {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the estimators.
pub type Result<T> = std::result::Result<T, FuzzyEntropyError>;
