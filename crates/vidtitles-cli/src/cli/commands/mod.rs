//! CLI command handlers, one file per command.

mod completions;
mod extract;
mod man;
mod run;

pub use completions::run_completions;
pub use extract::run_extract;
pub use man::run_man;
pub use run::{run_pipeline, RunArgs};
