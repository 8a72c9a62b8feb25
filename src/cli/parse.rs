//! CLI parse: clap types for tree-pro. No behavior; definitions only.

use crate::config::ColorMode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Print a concise, colored directory tree
#[derive(Parser, Debug, Clone)]
#[command(name = "tree-pro", version)]
#[command(about = "Print a concise, colored directory tree")]
pub struct Cli {
    /// Directory to render
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Maximum files to display per directory (0 for unlimited) [default: 5]
    #[arg(short = 'f', long = "files", allow_negative_numbers = true)]
    pub files: Option<i64>,

    /// Maximum identical directories to expand per group (0 for unlimited) [default: 1]
    #[arg(short = 'd', long = "dirs", allow_negative_numbers = true)]
    pub dirs: Option<i64>,

    /// Maximum recursion depth (0 for unlimited) [default: 0]
    #[arg(short = 'L', long = "level", allow_negative_numbers = true)]
    pub level: Option<i64>,

    /// When to color the output
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file path (in addition to the global config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// How the finished tree is emitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Box-drawing tree with identical directories collapsed
    #[default]
    Text,
    /// The walked tree as pretty-printed JSON
    Json,
}
