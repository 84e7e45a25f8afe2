//! Inference engine for schema detection.

mod statistical;
mod temporal;

pub use statistical::StatisticalAnalyzer;
pub use temporal::{has_time_component, parse_timestamp};
