use anyhow::{Context as AnyhowContext, Result};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::filter::ValidityFilter;

/// Optional tightening of the built-in rules. Nothing here can relax them.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Minimum entry length in characters; values below the built-in minimum are ignored
    pub min_length: Option<usize>,
    /// Extra values meaning "no data", on top of the built-in placeholders
    #[serde(default)]
    pub extra_placeholders: Vec<String>,
}

pub struct ConfigManager {
    config: Config,
}

impl ConfigManager {
    /// Only an explicitly given file is read; without one the built-in rules apply.
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => {
                let config = load_config(path)?;
                debug!("Loaded config from {}", path.display());
                config
            }
            None => Config::default(),
        };
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn validity_filter(&self) -> ValidityFilter {
        ValidityFilter::with_overrides(self.config.min_length, &self.config.extra_placeholders)
    }
}

fn load_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}
