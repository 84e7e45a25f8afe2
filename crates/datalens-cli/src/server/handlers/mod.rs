//! API request handlers.

mod analyze;
mod datasets;
mod health;

pub use analyze::*;
pub use datasets::*;
pub use health::*;
