//! Layers configuration sources and deserializes the result.

use super::sources;
use super::StorageConfig;
use crate::store::MAX_FILES;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};
use std::path::Path;

/// Builder seeded with the built-in defaults.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder().set_default("max_files", MAX_FILES as i64)
}

/// Precedence: defaults (lowest) -> settings file -> environment (highest).
pub fn load(path: Option<&Path>) -> Result<StorageConfig, ConfigError> {
    let mut builder = builder_with_defaults()?;
    if let Some(path) = path {
        builder = sources::add_file(builder, path);
    }
    let builder = sources::add_environment(builder);

    let config = builder.build()?;
    config.try_deserialize()
}
