use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::pipeline::RunOptions;
use crate::title::{TitleRules, DEFAULT_STRIP};

/// Default input, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "../static/links.csv";
/// Default output, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "../static/titles.csv";

/// Configuration loaded from `~/.config/vidtitles/config.toml`.
///
/// Every key is optional; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VidtitlesConfig {
    /// CSV file whose first column holds video URLs.
    pub input_path: PathBuf,
    /// CSV file the titles are written to (overwritten on every run).
    pub output_path: PathBuf,
    /// Literal removed once from each decoded filename.
    pub strip: String,
    /// Fail the run when a filename does not percent-decode to valid UTF-8.
    pub strict_decoding: bool,
}

impl Default for VidtitlesConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            strip: DEFAULT_STRIP.to_string(),
            strict_decoding: false,
        }
    }
}

impl VidtitlesConfig {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            rules: TitleRules::new(self.strip.clone()),
            strict_decoding: self.strict_decoding,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vidtitles")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load configuration from the XDG config dir, falling back to defaults when
/// no file exists. Nothing is written.
pub fn load() -> Result<VidtitlesConfig> {
    let path = config_path()?;
    load_from_path(&path)
}

pub fn load_from_path(path: &Path) -> Result<VidtitlesConfig> {
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(VidtitlesConfig::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: VidtitlesConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
