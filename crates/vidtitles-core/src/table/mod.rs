//! Delimited text I/O for the pipeline's two data files.
//!
//! Both directions use standard CSV quoting. The reader is flexible about
//! field counts; the writer emits exactly one field per row.

mod error;
mod reader;
mod writer;

pub use error::TableError;
pub use reader::{read_rows, read_rows_from, Row};
pub use writer::write_titles;
