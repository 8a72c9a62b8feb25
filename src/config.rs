//! Configuration System
//!
//! Layered configuration for display limits and logging. Sources, lowest
//! precedence first: built-in defaults, the global config file, an explicit
//! `--config` file, `TREE_PRO_*` environment variables. CLI flags are applied
//! on top by the caller.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

mod merge;
mod sources;

pub use sources::environment::ENV_PREFIX;
pub use sources::global_file::global_config_path;

/// When to emit ANSI colors in the rendered tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when stdout is a terminal and NO_COLOR is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against the current terminal state.
    pub fn enabled(self, stdout_is_terminal: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => stdout_is_terminal && std::env::var_os("NO_COLOR").is_none(),
        }
    }
}

/// Display limits. 0 means unlimited for every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Maximum files shown per directory
    #[serde(default = "default_files")]
    pub files: usize,

    /// Maximum identical directories expanded per group
    #[serde(default = "default_dirs")]
    pub dirs: usize,

    /// Maximum traversal depth
    #[serde(default)]
    pub level: usize,

    #[serde(default)]
    pub color: ColorMode,
}

fn default_files() -> usize {
    5
}

fn default_dirs() -> usize {
    1
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            files: default_files(),
            dirs: default_dirs(),
            level: 0,
            color: ColorMode::default(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeProConfig {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TreeProConfig {
    pub fn validate(&self) -> Result<(), ApiError> {
        self.logging.validate()
    }
}

/// Loads [`TreeProConfig`] from all sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration, optionally including an explicit config file.
    pub fn load(explicit: Option<&Path>) -> Result<TreeProConfig, ApiError> {
        let mut builder = merge::merge_policy::builder_with_defaults()?;
        builder = sources::global_file::add_to_builder(builder)?;
        if let Some(path) = explicit {
            debug!(config_path = %path.display(), "Loading explicit configuration");
            builder = sources::explicit_file::add_to_builder(builder, path)?;
        }
        builder = sources::environment::add_to_builder(builder);

        let config: TreeProConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a single file on top of defaults, ignoring
    /// the global file and environment.
    pub fn load_from_file(path: &Path) -> Result<TreeProConfig, ApiError> {
        let builder = merge::merge_policy::builder_with_defaults()?;
        let builder = sources::explicit_file::add_to_builder(builder, path)?;
        let config: TreeProConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Path of the global config file.
    pub fn global_config_path() -> Option<PathBuf> {
        global_config_path()
    }
}
