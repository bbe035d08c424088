//! Errors from reading or writing delimited files.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The input path does not exist. Kept apart from other I/O failures so the
    /// caller can report a missing input specifically.
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },
    /// Open, create, read or flush failed for any other reason.
    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The CSV layer rejected a record (bad UTF-8, unbalanced quotes, write error).
    #[error("{}: {}", .path.display(), .source)]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl TableError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TableError::NotFound { .. })
    }
}
