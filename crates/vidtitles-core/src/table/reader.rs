//! Input reader: comma-separated rows, no header.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use super::error::TableError;

/// One parsed line of the input. Only the first field is consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row(pub Vec<String>);

impl Row {
    /// First field, treated as the video URL.
    pub fn url(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Reads all non-empty rows from the CSV file at `path`, in file order.
///
/// Returns [`TableError::NotFound`] when the path does not exist; every other
/// failure is `Io` or `Csv`.
pub fn read_rows(path: &Path) -> Result<Vec<Row>, TableError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => TableError::NotFound {
            path: path.to_path_buf(),
        },
        _ => TableError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    read_rows_from(file, path)
}

/// Parses rows from any reader. `origin` is only used in error messages.
pub fn read_rows_from<R: Read>(reader: R, origin: &Path) -> Result<Vec<Row>, TableError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|source| TableError::Csv {
            path: origin.to_path_buf(),
            source,
        })?;
        if record.is_empty() {
            continue;
        }
        rows.push(Row(record.iter().map(str::to_string).collect()));
    }
    Ok(rows)
}
