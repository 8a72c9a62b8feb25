//! CLI presentation: text and json formatters for a walked tree.

use crate::error::ApiError;
use crate::render::{root_label, Palette, TreePrinter};
use crate::tree::node::DirectoryNode;

/// Box-drawing rendering with identical directories collapsed.
pub fn format_tree_text(
    target: &str,
    root: &DirectoryNode,
    max_dirs: Option<usize>,
    color: bool,
) -> Result<String, ApiError> {
    TreePrinter::new(Palette::new(color), max_dirs)
        .render(&root_label(target), root)
        .map_err(|e| ApiError::Render(e.to_string()))
}

/// The full walked tree as pretty JSON, newline-terminated.
pub fn format_tree_json(root: &DirectoryNode) -> Result<String, ApiError> {
    let mut json =
        serde_json::to_string_pretty(root).map_err(|e| ApiError::Render(e.to_string()))?;
    json.push('\n');
    Ok(json)
}
