//! Configuration for the interactive shell.
//!
//! Every field has a default, so a config file only needs to name the
//! settings it changes.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// Settings for [`crate::shell::Shell`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Suppress the introduction line
    pub quiet: bool,
    /// Maximum invalid entries accepted per side before giving up.
    /// `None` keeps asking until a valid value or an abort arrives.
    pub max_attempts: Option<usize>,
    /// Emit logs as JSON instead of human-readable lines
    pub json_logs: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            max_attempts: None,
            json_logs: false,
        }
    }
}

impl ShellConfig {
    /// Parse a config from a JSON document.
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Load a config from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serialize to a pretty-printed JSON document.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
