//! Merge rules: defaults applied before any file or environment source.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Create a Config builder with the built-in display defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("display.files", 5_i64)?
        .set_default("display.dirs", 1_i64)?
        .set_default("display.level", 0_i64)?
        .set_default("display.color", "auto")
}
