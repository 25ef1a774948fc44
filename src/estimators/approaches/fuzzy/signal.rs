// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2, ArrayView1, Axis};

use crate::estimators::error::{FuzzyEntropyError, Result};

/// Input data representation for fuzzy entropy estimation
///
/// Accepts a single series, a 2D array of several channels, or labeled columns
/// of a table. All three are reduced to a [`ChannelSet`] before any numerics run.
#[derive(Debug, Clone)]
pub enum SignalData {
    /// One time series.
    Single(Array1<f64>),

    /// Several channels in one 2D array.
    /// First dimension (rows) = samples, second dimension (columns) = channels
    MultiChannel(Array2<f64>),

    /// Named columns of a table, kept in the given order.
    Labeled(Vec<(String, Array1<f64>)>),
}

impl From<Array1<f64>> for SignalData {
    fn from(array: Array1<f64>) -> Self {
        SignalData::Single(array)
    }
}

impl From<Vec<f64>> for SignalData {
    fn from(values: Vec<f64>) -> Self {
        SignalData::Single(Array1::from(values))
    }
}

impl From<&[f64]> for SignalData {
    fn from(values: &[f64]) -> Self {
        SignalData::Single(Array1::from(values.to_vec()))
    }
}

impl From<Array2<f64>> for SignalData {
    fn from(array: Array2<f64>) -> Self {
        SignalData::MultiChannel(array)
    }
}

impl From<Vec<(String, Array1<f64>)>> for SignalData {
    fn from(columns: Vec<(String, Array1<f64>)>) -> Self {
        SignalData::Labeled(columns)
    }
}

impl From<Vec<(&str, Vec<f64>)>> for SignalData {
    fn from(columns: Vec<(&str, Vec<f64>)>) -> Self {
        SignalData::Labeled(
            columns
                .into_iter()
                .map(|(label, values)| (label.to_string(), Array1::from(values)))
                .collect(),
        )
    }
}

/// Canonical channel representation used by the numeric core.
///
/// Only built through [`ChannelSet::from_signal`], so every instance holds at
/// least one channel, one label per channel, equal lengths and finite samples.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSet {
    /// One label per channel: the column label, or the column index as text.
    labels: Vec<String>,
    channels: Vec<Array1<f64>>,
    /// `false` only for [`SignalData::Single`] input.
    multichannel: bool,
}

impl ChannelSet {
    /// Normalize any accepted input into an ordered set of equal-length channels.
    pub fn from_signal(data: impl Into<SignalData>) -> Result<Self> {
        let (labels, channels, multichannel) = match data.into() {
            SignalData::Single(series) => (vec!["0".to_string()], vec![series], false),
            SignalData::MultiChannel(matrix) => {
                let channels: Vec<Array1<f64>> = matrix
                    .axis_iter(Axis(1))
                    .map(|column| column.to_owned())
                    .collect();
                let labels = (0..channels.len()).map(|c| c.to_string()).collect();
                (labels, channels, true)
            }
            SignalData::Labeled(columns) => {
                let (labels, channels): (Vec<String>, Vec<Array1<f64>>) =
                    columns.into_iter().unzip();
                (labels, channels, true)
            }
        };

        if channels.is_empty() {
            return Err(FuzzyEntropyError::shape_mismatch("signal has no channels"));
        }
        let n_samples = channels[0].len();
        for (label, channel) in labels.iter().zip(channels.iter()) {
            if channel.len() != n_samples {
                return Err(FuzzyEntropyError::shape_mismatch(format!(
                    "channel '{label}' has {} samples, expected {n_samples}",
                    channel.len()
                )));
            }
            if let Some(pos) = channel.iter().position(|x| !x.is_finite()) {
                return Err(FuzzyEntropyError::shape_mismatch(format!(
                    "channel '{label}' has a non-numeric value at sample {pos}"
                )));
            }
        }

        Ok(Self {
            labels,
            channels,
            multichannel,
        })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn channels(&self) -> &[Array1<f64>] {
        &self.channels
    }

    pub fn is_multichannel(&self) -> bool {
        self.multichannel
    }

    pub fn n_channels(&self) -> usize {
        self.channels.len()
    }

    /// Samples per channel (all channels share it).
    pub fn n_samples(&self) -> usize {
        self.channels.first().map_or(0, |c| c.len())
    }

    pub fn views(&self) -> Vec<ArrayView1<'_, f64>> {
        self.channels.iter().map(|c| c.view()).collect()
    }
}
