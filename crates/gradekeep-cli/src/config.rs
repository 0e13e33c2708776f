//! CLI configuration.
//!
//! An optional `gradekeep.toml` in the working directory overrides the
//! records file name. No file means defaults; a file that fails to parse
//! is a startup error.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "gradekeep.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the flat records file, relative to the working directory.
    #[serde(default = "default_records_file")]
    pub records_file: PathBuf,
}

fn default_records_file() -> PathBuf {
    PathBuf::from("student_records.txt")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            records_file: default_records_file(),
        }
    }
}

/// Load `gradekeep.toml` from the working directory, or defaults.
pub fn load_config() -> Result<Config> {
    let path = PathBuf::from(CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("failed to parse config: {}", path.display()))
}
