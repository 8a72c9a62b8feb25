//! CLI route: resolve limits from flags and config, walk, render.

use crate::cli::parse::{Cli, OutputFormat};
use crate::cli::presentation;
use crate::config::{ConfigLoader, TreeProConfig};
use crate::error::ApiError;
use crate::tree::walker::{WalkOptions, Walker};
use std::io::IsTerminal;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Limits after merging flags over config. `None` means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLimits {
    pub max_files: Option<usize>,
    pub max_dirs: Option<usize>,
    pub max_depth: Option<NonZeroUsize>,
}

impl DisplayLimits {
    /// Merge flags over config values. Flags must be non-negative; 0 means
    /// unlimited.
    pub fn resolve(cli: &Cli, config: &TreeProConfig) -> Result<Self, ApiError> {
        let files = flag_or_config("--files", cli.files, config.display.files)?;
        let dirs = flag_or_config("--dirs", cli.dirs, config.display.dirs)?;
        let level = flag_or_config("--level", cli.level, config.display.level)?;

        Ok(Self {
            max_files: unlimited_if_zero(files),
            max_dirs: unlimited_if_zero(dirs),
            max_depth: NonZeroUsize::new(level),
        })
    }

    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            max_files_per_dir: self.max_files,
            max_depth: self.max_depth,
        }
    }
}

fn flag_or_config(flag: &str, value: Option<i64>, fallback: usize) -> Result<usize, ApiError> {
    match value {
        None => Ok(fallback),
        Some(v) => usize::try_from(v)
            .map_err(|_| ApiError::InvalidArgument(format!("{} must be >= 0", flag))),
    }
}

fn unlimited_if_zero(value: usize) -> Option<usize> {
    (value > 0).then_some(value)
}

/// Execution context for one invocation.
pub struct RunContext {
    config: TreeProConfig,
}

impl RunContext {
    /// Load configuration (global file, optional explicit file, environment).
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = ConfigLoader::load(config_path.as_deref())?;
        Ok(Self { config })
    }

    pub fn with_config(config: TreeProConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TreeProConfig {
        &self.config
    }

    /// Walk the requested path and return the rendered output.
    #[instrument(skip_all, fields(path = %cli.path.display()))]
    pub fn execute(&self, cli: &Cli) -> Result<String, ApiError> {
        let limits = DisplayLimits::resolve(cli, &self.config)?;
        debug!(?limits, "Resolved display limits");

        let target = cli.path.to_string_lossy();
        let walker = Walker::new(limits.walk_options());
        let root = walker.walk(&cli.path)?;

        match cli.format {
            OutputFormat::Json => presentation::format_tree_json(&root),
            OutputFormat::Text => {
                let color_mode = cli.color.unwrap_or(self.config.display.color);
                let color = color_mode.enabled(std::io::stdout().is_terminal());
                presentation::format_tree_text(&target, &root, limits.max_dirs, color)
            }
        }
    }
}
