use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Simulation defaults, optionally overridden from a TOML file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SimConfig {
    #[serde(default = "default_size")]
    pub size: usize,
    #[serde(default = "default_trials")]
    pub trials: usize,
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            trials: default_trials(),
            delay_ms: default_delay_ms(),
            seed: None,
        }
    }
}

impl SimConfig {
    /// Loads the config file at `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: SimConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }
}

fn default_size() -> usize {
    20
}

fn default_trials() -> usize {
    50
}

fn default_delay_ms() -> u64 {
    50
}
