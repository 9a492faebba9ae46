//! Autoeda: One-Shot Exploratory Data Analysis
//!
//! A library for taking a quick, repeatable first look at a delimited
//! dataset: descriptive statistics, distribution charts and a correlation
//! heatmap, written to a fixed output directory.

pub mod charts;
pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
