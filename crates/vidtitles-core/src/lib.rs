//! Derive human-readable titles from video URLs listed in a CSV file.
//!
//! [`pipeline::run`] reads the URL list with [`table`], turns each URL into a
//! title with [`title`], and writes the titles back out as CSV.

pub mod config;
pub mod logging;

pub mod pipeline;
pub mod table;
pub mod title;

pub use pipeline::{run, PipelineError, RunOptions, RunSummary};
pub use title::{extract, extract_strict};
