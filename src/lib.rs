//! tree-pro: concise directory trees
//!
//! Walks a directory subtree into an owned tree annotated with untruncated
//! counts and structural signatures, groups sibling directories that share a
//! signature, and renders the result with long file listings truncated and
//! identical directories collapsed.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod tree;
pub mod types;
