//! Report module - summary text and output files

pub mod summary;
pub mod writer;

pub use summary::*;
pub use writer::*;
