//! Pipeline module - loading and aggregate analysis

pub mod categories;
pub mod correlation;
pub mod loader;
pub mod stats;

pub use categories::*;
pub use correlation::*;
pub use loader::*;
pub use stats::*;
