use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use spiral_hazards_core::RulesetConfig;

const DEFAULT_BOARD_SIZE: i32 = 11;
const DEFAULT_TURNS: u32 = 30;

/// Settings for a hazard preview run, loadable from a TOML file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct PreviewConfig {
    /// Ruleset settings shared with the engine.
    #[serde(flatten)]
    pub(crate) ruleset: RulesetConfig,
    /// Number of board columns.
    pub(crate) width: i32,
    /// Number of board rows.
    pub(crate) height: i32,
    /// Number of turns to play.
    pub(crate) turns: u32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            ruleset: RulesetConfig::default(),
            width: DEFAULT_BOARD_SIZE,
            height: DEFAULT_BOARD_SIZE,
            turns: DEFAULT_TURNS,
        }
    }
}

impl PreviewConfig {
    /// Parses a configuration from TOML text, filling omitted keys with defaults.
    pub(crate) fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse preview config toml contents")
    }

    /// Reads and parses the configuration stored at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("invalid config file {}", path.display()))
    }
}
