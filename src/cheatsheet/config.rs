use crate::error::{CheatError, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LIST: &str = "cheatsheet";

/// How entries are laid out when printed.
///
/// Written by name (`full`, `compact`, `simple`) or by number (`1`, `2`, `3`)
/// in `config.json` and on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum DisplayStyle {
    /// Id, primary and clue; then the answer and the tags.
    #[default]
    Full,
    /// Id, primary and tags; then the clue and the answer.
    Compact,
    /// Id, clue and answer only.
    Simple,
}

impl FromStr for DisplayStyle {
    type Err = CheatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" | "1" => Ok(DisplayStyle::Full),
            "compact" | "2" => Ok(DisplayStyle::Compact),
            "simple" | "3" => Ok(DisplayStyle::Simple),
            other => Err(CheatError::Config(format!(
                "unknown style '{}' (expected full, compact, simple or 1-3)",
                other
            ))),
        }
    }
}

impl TryFrom<String> for DisplayStyle {
    type Error = CheatError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for DisplayStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayStyle::Full => write!(f, "full"),
            DisplayStyle::Compact => write!(f, "compact"),
            DisplayStyle::Simple => write!(f, "simple"),
        }
    }
}

/// Configuration for cheatsheet, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CheatConfig {
    /// List used when neither `-l` nor `--listpath` is given
    #[serde(default = "default_list")]
    pub default_list: String,

    /// Display style used when a command does not pass `--style`
    #[serde(default)]
    pub default_style: DisplayStyle,

    /// Overrides the directory holding the list files
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_list() -> String {
    DEFAULT_LIST.to_string()
}

impl Default for CheatConfig {
    fn default() -> Self {
        Self {
            default_list: default_list(),
            default_style: DisplayStyle::default(),
            data_dir: None,
        }
    }
}

impl CheatConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CheatError::Io)?;
        let config: CheatConfig = serde_json::from_str(&content).map_err(|e| {
            CheatError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        if config.default_list.is_empty() {
            return Err(CheatError::Config("default_list cannot be empty".into()));
        }
        Ok(config)
    }
}
