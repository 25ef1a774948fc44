// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # fuzzyen
//!
//! Fuzzy entropy (FuzzyEn) of single- and multi-channel time series.
//!
//! ## Quick Start
//!
//! ```rust
//! use fuzzyen::{FuzzyEntropyConfig, compute_fuzzy_entropy};
//! use ndarray::Array1;
//!
//! let signal = Array1::from_iter((0..300).map(|i| (i as f64 * 0.1).sin()));
//! let (entropy, info) = compute_fuzzy_entropy(signal, FuzzyEntropyConfig::default()).unwrap();
//! assert!(entropy.is_finite());
//! assert!(info.values.is_none());
//! ```
//!
//! ## Parameters
//!
//! | Parameter | Default | Meaning |
//! |-----------|---------|---------|
//! | `delay` | 1 | Spacing τ between samples of one embedding vector |
//! | `dimension` | 2 | Embedding order m (m+1 is used as well) |
//! | `tolerance` | `0.2 * std` | Scale r of the membership function |
//! | `membership_exponent` | 2 | Exponent n in `exp(-d^n / r)` |
//!
//! The derived tolerance uses the sample standard deviation (N-1 denominator),
//! pooled over all channels so one tolerance is shared by every channel.
//!
//! ## Input Shapes
//!
//! - `Array1<f64>` / `Vec<f64>`: one channel
//! - `Array2<f64>`: rows are samples, columns are channels
//! - `Vec<(String, Array1<f64>)>`: labeled channels (table columns)
//!
//! ## Degenerate Ratios
//!
//! If φ(m) is zero the estimate fails with `DegenerateComputation`. If only φ(m+1) is
//! zero the entropy is `f64::INFINITY`. Multi-channel means are not filtered, so
//! an infinite channel makes the mean infinite.
//!
//! ## Feature Flags
//!
//! - `parallel`: Evaluate similarity degrees and channels on the rayon thread pool
//! - `fast_exp`: Use fast exponential approximations (trades accuracy for speed)

pub mod estimators;

pub use estimators::approaches::fuzzy::{
    ChannelPolicy, FuzzyEntropy, FuzzyEntropyConfig, FuzzyEntropyInfo, SignalData, Tolerance,
    compute_fuzzy_entropy,
};
pub use estimators::error::{FuzzyEntropyError, Result};
pub use estimators::traits::{GlobalValue, OptionalLocalValues};
