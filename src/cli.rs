//! CLI domain: parse, route, output, and presentation only.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, OutputFormat};
pub use presentation::{format_tree_json, format_tree_text};
pub use route::{DisplayLimits, RunContext};
