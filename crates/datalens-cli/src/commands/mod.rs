//! CLI command implementations.

pub mod analyze;
pub mod list;
pub mod serve;
pub mod suggest;
