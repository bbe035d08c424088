//! Title extraction pipeline: read every row, derive every title, then write
//! them all at once.
//!
//! The input is fully read and closed before the output is opened, and the
//! output is only touched after every row has been processed. A failure in
//! reading or extraction therefore leaves the output file as it was.

mod error;

pub use error::{PipelineError, ProcessingError};

use std::path::{Path, PathBuf};

use crate::table::{read_rows, write_titles};
use crate::title::TitleRules;

/// Per-run behavior.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub rules: TitleRules,
    /// Treat segments that do not percent-decode to UTF-8 as a processing error
    /// instead of substituting U+FFFD.
    pub strict_decoding: bool,
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output: PathBuf,
    /// Rows written, equal to the number of non-empty input rows.
    pub count: usize,
}

/// Runs the pipeline from `input` to `output`.
///
/// `on_progress` is called once per processed row with its title, in input
/// order, before anything is written.
pub fn run<F>(
    input: &Path,
    output: &Path,
    options: &RunOptions,
    mut on_progress: F,
) -> Result<RunSummary, PipelineError>
where
    F: FnMut(&str),
{
    tracing::info!(input = %input.display(), "reading input rows");
    let rows = read_rows(input).inspect_err(|e| {
        tracing::warn!(input = %input.display(), "read failed: {e}");
    })?;

    tracing::info!(rows = rows.len(), "processing rows");
    let mut titles = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let Some(url) = row.url() else {
            continue;
        };
        let title = if options.strict_decoding {
            options.rules.apply_strict(url).inspect_err(|e| {
                tracing::warn!(row = index, "title extraction failed: {e}");
            })?
        } else {
            options.rules.apply(url)
        };
        tracing::debug!(row = index, url, title = %title, "extracted title");
        on_progress(&title);
        titles.push(title);
    }

    tracing::info!(output = %output.display(), count = titles.len(), "writing titles");
    let count = write_titles(output, &titles).map_err(|e| {
        tracing::warn!(output = %output.display(), "write failed: {e}");
        PipelineError::Processing(ProcessingError::Table(e))
    })?;

    Ok(RunSummary {
        output: output.to_path_buf(),
        count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableError;

    #[test]
    fn not_found_maps_to_input_not_found() {
        let err: PipelineError = TableError::NotFound {
            path: PathBuf::from("links.csv"),
        }
        .into();
        assert!(matches!(err, PipelineError::InputNotFound { .. }));
        assert_eq!(err.to_string(), "could not find input file 'links.csv'");
    }

    #[test]
    fn other_table_errors_are_processing() {
        let err: PipelineError = TableError::Io {
            path: PathBuf::from("titles.csv"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        assert!(matches!(err, PipelineError::Processing(_)));
        assert_eq!(err.to_string(), "titles.csv: denied");
    }

    #[test]
    fn progress_fires_per_row_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("links.csv");
        let output = dir.path().join("titles.csv");
        std::fs::write(&input, "https://x/One.mp4\nhttps://x/Two.mp4\n").unwrap();

        let mut seen = Vec::new();
        let summary = run(&input, &output, &RunOptions::default(), |t| {
            seen.push(t.to_string())
        })
        .unwrap();
        assert_eq!(seen, vec!["One", "Two"]);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.output, output);
    }
}
