// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Fuzzy entropy estimator module
// This module contains the fuzzy entropy estimator, its configuration, input
// normalization and the numeric utilities it is built from.

pub mod config;
pub mod fuzzy;
pub mod fuzzy_utils;
pub mod signal;

pub use config::{ChannelPolicy, DEFAULT_TOLERANCE_FACTOR, FuzzyEntropyConfig, Tolerance};
pub use fuzzy::{
    ChannelEstimate, ChannelFailure, FuzzyEntropy, FuzzyEntropyInfo, compute_fuzzy_entropy,
    estimate_channel,
};
pub use signal::{ChannelSet, SignalData};
