//! Configuration sources: an optional settings file and `CONFTREE_*` variables.

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use std::path::Path;

/// Add a required settings file. The format follows the file extension.
pub fn add_file(builder: ConfigBuilder<DefaultState>, path: &Path) -> ConfigBuilder<DefaultState> {
    builder.add_source(File::from(path).required(true))
}

/// Add the environment overlay.
///
/// `CONFTREE_MAX_FILES` sets `max_files`; nested keys use `__`, as in
/// `CONFTREE_LOGGING__LEVEL`.
pub fn add_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("CONFTREE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}
