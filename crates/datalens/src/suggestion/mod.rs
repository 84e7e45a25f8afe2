//! Suggestions for analyses worth running on a dataset.
//!
//! Suggestions are derived from the inferred schema alone; they never look
//! at the data beyond the per-column statistics.

mod generator;
mod suggestion;

pub use generator::{SuggestionConfig, SuggestionEngine, DEFAULT_CATEGORICAL_THRESHOLD};
pub use suggestion::{Suggestion, SuggestionReport};
