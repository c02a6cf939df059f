//! Merge configuration
//!
//! Tunables are explicit values threaded into the comparator and joiner,
//! never ambient globals, so independent merges can run with different
//! settings.

use crate::core::models::results::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Merge tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Max drift, in milliseconds, at which two time boundaries still match
    pub slack_ms: i64,
    /// Flatten each track's cue to one physical line before stacking
    pub join_lines: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            slack_ms: 500,
            join_lines: true,
        }
    }
}

impl MergeConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> CoreResult<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            let config: Self = serde_json::from_str(&contents)?;
            Ok(config)
        } else {
            // Return default if file doesn't exist
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Get default settings file path (in current directory)
    pub fn default_path() -> PathBuf {
        PathBuf::from("submerge.json")
    }

    /// Load from default location or fall back to defaults
    pub fn load_or_default() -> CoreResult<Self> {
        Self::load(&Self::default_path())
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.slack_ms <= 0 {
            return Err(CoreError::ConfigError(format!(
                "slack_ms must be positive, got {}",
                self.slack_ms
            )));
        }
        Ok(())
    }
}
