//! Training configuration.

use crate::errors::{DepParseError, DepParseResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for training an action predictor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Passes over the collected training examples.
    pub epochs: usize,
    /// Features seen fewer times than this are dropped after training.
    pub min_observations: u64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            epochs: 5,
            min_observations: 1,
        }
    }
}

impl TrainingConfig {
    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> DepParseResult<Self> {
        toml::from_str(content).map_err(|e| DepParseError::Config {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> DepParseResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| DepParseError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| DepParseError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
