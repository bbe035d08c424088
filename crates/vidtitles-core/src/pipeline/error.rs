//! The two failure kinds a pipeline run can end with.

use std::path::PathBuf;

use crate::table::TableError;
use crate::title::TitleError;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The input file does not exist. Nothing was written.
    #[error("could not find input file '{}'", .path.display())]
    InputNotFound { path: PathBuf },
    /// Anything else: unreadable input, malformed rows, decode or write failure.
    #[error(transparent)]
    Processing(#[from] ProcessingError),
}

/// Underlying cause of [`PipelineError::Processing`].
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error(transparent)]
    Table(TableError),
    #[error(transparent)]
    Title(#[from] TitleError),
}

impl From<TableError> for PipelineError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::NotFound { path } => PipelineError::InputNotFound { path },
            other => PipelineError::Processing(ProcessingError::Table(other)),
        }
    }
}

impl From<TitleError> for PipelineError {
    fn from(err: TitleError) -> Self {
        PipelineError::Processing(ProcessingError::Title(err))
    }
}
