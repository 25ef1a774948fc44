pub mod fuzzy;

// Re-exports so tests and users can import
// fuzzyen::estimators::approaches::* ergonomically.
pub use fuzzy::FuzzyEntropy;
