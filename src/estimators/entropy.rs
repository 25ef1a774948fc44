use crate::estimators::approaches::fuzzy;
use crate::estimators::error::Result;
pub use crate::estimators::traits::{GlobalValue, OptionalLocalValues};

/// Entropy estimation methods for time series
///
/// This struct provides static methods for creating entropy estimators.
pub struct Entropy;

impl Entropy {
    /// Creates a new fuzzy entropy estimator
    ///
    /// # Arguments
    ///
    /// * `data` - Single series, 2D array (samples x channels) or labeled channels
    /// * `config` - Delay, dimension, tolerance and membership exponent
    ///
    /// # Returns
    ///
    /// The estimator with its value already computed, or the first validation
    /// or numeric error encountered
    pub fn new_fuzzy(
        data: impl Into<fuzzy::SignalData>,
        config: fuzzy::FuzzyEntropyConfig,
    ) -> Result<fuzzy::FuzzyEntropy> {
        fuzzy::FuzzyEntropy::new(data, config)
    }

    /// Creates a new fuzzy entropy estimator with default parameters
    ///
    /// Delay 1, dimension 2, tolerance `0.2 * std` and membership exponent 2.
    pub fn new_fuzzy_default(data: impl Into<fuzzy::SignalData>) -> Result<fuzzy::FuzzyEntropy> {
        fuzzy::FuzzyEntropy::new(data, fuzzy::FuzzyEntropyConfig::default())
    }
}
