//! CLI for vidtitles.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use vidtitles_core::config;

use commands::{run_completions, run_extract, run_man, run_pipeline, RunArgs};

/// Top-level CLI. With no subcommand, behaves like `vidtitles run`.
#[derive(Debug, Parser)]
#[command(name = "vidtitles")]
#[command(about = "Derive readable titles from a CSV list of video URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Read the URL list, derive a title per URL, and write the titles CSV.
    Run {
        /// Input CSV whose first column holds video URLs (default: ../static/links.csv).
        #[arg(long, value_name = "PATH")]
        input: Option<PathBuf>,
        /// Output CSV, overwritten on every run (default: ../static/titles.csv).
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Fail when a filename does not percent-decode to valid UTF-8.
        #[arg(long)]
        strict: bool,
    },

    /// Print the title derived from each URL, one per line. No files are touched.
    Extract {
        /// Video URLs.
        #[arg(required = true, value_name = "URL")]
        urls: Vec<String>,
    },

    /// Print a shell completion script to stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the roff man page to stdout.
    Man,
}

impl CliCommand {
    /// Parses arguments, dispatches, and returns the process exit code.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        let command = cli.command.unwrap_or(CliCommand::Run {
            input: None,
            output: None,
            strict: false,
        });

        match command {
            CliCommand::Run {
                input,
                output,
                strict,
            } => {
                let cfg = config::load()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_pipeline(
                    &cfg,
                    RunArgs {
                        input,
                        output,
                        strict,
                    },
                )
            }
            CliCommand::Extract { urls } => {
                let cfg = config::load()?;
                run_extract(&cfg, &urls)?;
                Ok(0)
            }
            CliCommand::Completions { shell } => {
                run_completions(shell);
                Ok(0)
            }
            CliCommand::Man => {
                run_man()?;
                Ok(0)
            }
        }
    }
}

#[cfg(test)]
mod tests;
