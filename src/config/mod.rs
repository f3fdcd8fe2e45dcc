//! Storage configuration
//!
//! Loaded with the `config` crate from built-in defaults, an optional
//! settings file and `CONFTREE_*` environment variables.

pub mod merge;
pub mod sources;

use crate::error::SetupError;
use crate::logging::LoggingConfig;
use crate::store::MAX_FILES;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_max_files() -> usize {
    MAX_FILES
}

/// Settings for a [`Storage`](crate::store::Storage) and its logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Maximum number of distinct source files; clamped to the id space.
    #[serde(default = "default_max_files")]
    pub max_files: usize,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            max_files: default_max_files(),
            logging: LoggingConfig::default(),
        }
    }
}

impl StorageConfig {
    /// Load configuration, reading `path` when given.
    pub fn load(path: Option<&Path>) -> Result<Self, SetupError> {
        Ok(merge::load(path)?)
    }
}
