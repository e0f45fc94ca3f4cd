//! Quiz configuration.
//!
//! Values are layered, lowest priority first: built-in defaults, a TOML
//! config file, `TIMEQUIZ_*` environment variables, command-line flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use timequiz_core::DEFAULT_TIME_LIMIT;

/// Top-level timequiz configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// CSV file with `question,answer` records.
    #[serde(default = "default_csv")]
    pub csv: PathBuf,
    /// Time budget for the whole quiz, in seconds.
    #[serde(default = "default_time_limit")]
    pub time_limit_secs: u64,
}

fn default_csv() -> PathBuf {
    PathBuf::from("problems.csv")
}
fn default_time_limit() -> u64 {
    DEFAULT_TIME_LIMIT.as_secs()
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            csv: default_csv(),
            time_limit_secs: default_time_limit(),
        }
    }
}

impl QuizConfig {
    /// Apply command-line values on top of this config.
    pub fn with_overrides(mut self, csv: Option<PathBuf>, time_limit_secs: Option<u64>) -> Self {
        if let Some(csv) = csv {
            self.csv = csv;
        }
        if let Some(secs) = time_limit_secs {
            self.time_limit_secs = secs;
        }
        self
    }

    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.time_limit_secs)
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `timequiz.toml` in the current directory
/// 2. `~/.config/timequiz/config.toml`
///
/// Environment variable overrides: `TIMEQUIZ_CSV`, `TIMEQUIZ_TIME`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("timequiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let config = match config_path {
        Some(path) => read_config_file(&path)?,
        None => QuizConfig::default(),
    };

    apply_env(config, |key| std::env::var(key).ok())
}

fn read_config_file(path: &Path) -> Result<QuizConfig> {
    tracing::debug!("loading config from {}", path.display());
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<QuizConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Apply `TIMEQUIZ_*` overrides read through `lookup`.
fn apply_env(
    mut config: QuizConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<QuizConfig> {
    if let Some(csv) = lookup("TIMEQUIZ_CSV") {
        config.csv = PathBuf::from(csv);
    }
    if let Some(time) = lookup("TIMEQUIZ_TIME") {
        config.time_limit_secs = time
            .trim()
            .parse()
            .with_context(|| format!("invalid TIMEQUIZ_TIME value: '{time}'"))?;
    }
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("timequiz"))
}
