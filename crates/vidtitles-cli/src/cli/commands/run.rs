//! `vidtitles run` – extract titles from the input CSV into the output CSV.

use anyhow::Result;
use std::path::PathBuf;
use vidtitles_core::config::VidtitlesConfig;
use vidtitles_core::pipeline::{self, PipelineError, RunSummary};

/// Exit code when the input file does not exist.
pub const EXIT_INPUT_NOT_FOUND: i32 = 2;
/// Exit code for any other pipeline failure.
pub const EXIT_PROCESSING: i32 = 1;

/// Command-line overrides for a run; `None` falls back to the config.
#[derive(Debug, Default)]
pub struct RunArgs {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub strict: bool,
}

/// Resolves input and output paths: flag, then config.
fn resolve_paths(cfg: &VidtitlesConfig, args: &RunArgs) -> (PathBuf, PathBuf) {
    let input = args.input.clone().unwrap_or_else(|| cfg.input_path.clone());
    let output = args.output.clone().unwrap_or_else(|| cfg.output_path.clone());
    (input, output)
}

fn progress_message(title: &str) -> String {
    format!("Processed: {title}")
}

fn success_message(summary: &RunSummary) -> String {
    format!(
        "\nSuccess! Video titles have been saved to '{}'\nTotal videos processed: {}",
        summary.output.display(),
        summary.count
    )
}

fn failure_message(err: &PipelineError) -> String {
    match err {
        PipelineError::InputNotFound { path } => {
            format!("Error: Could not find input file '{}'", path.display())
        }
        PipelineError::Processing(cause) => format!("Error processing file: {cause}"),
    }
}

fn exit_code(err: &PipelineError) -> i32 {
    match err {
        PipelineError::InputNotFound { .. } => EXIT_INPUT_NOT_FOUND,
        PipelineError::Processing(_) => EXIT_PROCESSING,
    }
}

/// Runs the pipeline and reports on the console. Pipeline failures are
/// printed and mapped to an exit code rather than returned.
pub fn run_pipeline(cfg: &VidtitlesConfig, args: RunArgs) -> Result<i32> {
    let (input, output) = resolve_paths(cfg, &args);
    let mut options = cfg.run_options();
    options.strict_decoding |= args.strict;

    let result = pipeline::run(&input, &output, &options, |title| {
        println!("{}", progress_message(title));
    });

    match result {
        Ok(summary) => {
            tracing::info!("run completed: {} title(s) written", summary.count);
            println!("{}", success_message(&summary));
            Ok(0)
        }
        Err(err) => {
            tracing::warn!("run failed: {err}");
            eprintln!("{}", failure_message(&err));
            Ok(exit_code(&err))
        }
    }
}
