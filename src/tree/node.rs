//! Directory tree nodes produced by the walker

use crate::error::ReadError;
use crate::tree::hasher::{self, ExtensionHistogram};
use crate::types::Signature;
use serde::Serialize;
use std::path::PathBuf;

/// A file retained for display. Only the name is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub name: String,
}

impl FileEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// How much is known about a directory's contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum NodeState {
    /// Listed successfully; children, files and counts are populated.
    Read,
    /// Recorded but never read because the depth limit was reached.
    DepthLimited,
    /// Listing failed. Contents and counts are zero.
    Unreadable(ReadError),
}

/// One directory level of the walked tree.
///
/// Counts are computed before any display truncation: `files` may be shorter
/// than `immediate_file_count`, but totals always reflect every file seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryNode {
    /// Basename used for display
    pub name: String,
    /// Resolved filesystem path (error context and re-reading only)
    pub path: PathBuf,
    /// 0 at the root
    pub depth: usize,
    /// Subdirectories in name order
    pub children: Vec<DirectoryNode>,
    /// Files retained for display, in name order
    pub files: Vec<FileEntry>,
    /// Files discovered but not retained because of the per-directory limit
    pub hidden_file_count: usize,
    pub immediate_dir_count: usize,
    pub immediate_file_count: usize,
    /// Directories below this one (this directory itself excluded)
    pub total_dir_count: usize,
    /// Files in this directory and everything below it
    pub total_file_count: usize,
    /// Structural signature; `None` until the subtree has been walked
    pub signature: Option<Signature>,
    #[serde(flatten)]
    pub state: NodeState,
}

impl DirectoryNode {
    /// Build a fully read directory from its listing.
    ///
    /// `children` must already be finalized; totals and the signature are
    /// derived from them here, bottom-up.
    pub fn from_listing(
        name: String,
        path: PathBuf,
        depth: usize,
        children: Vec<DirectoryNode>,
        files: Vec<FileEntry>,
        hidden_file_count: usize,
        histogram: &ExtensionHistogram,
    ) -> Self {
        let immediate_dir_count = children.len();
        let immediate_file_count = files.len() + hidden_file_count;

        let total_dir_count = immediate_dir_count
            + children.iter().map(|c| c.total_dir_count).sum::<usize>();
        let total_file_count = immediate_file_count
            + children.iter().map(|c| c.total_file_count).sum::<usize>();

        // Unset children still take part, under the same fallback grouping uses
        let fallbacks: Vec<Signature> = children
            .iter()
            .filter(|c| c.signature.is_none())
            .map(|c| hasher::compute_fallback_signature(&c.name, c.depth))
            .collect();
        let child_signatures: Vec<&Signature> = children
            .iter()
            .filter_map(|c| c.signature.as_ref())
            .chain(fallbacks.iter())
            .collect();
        let signature = hasher::compute_directory_signature(histogram, &child_signatures);

        Self {
            name,
            path,
            depth,
            children,
            files,
            hidden_file_count,
            immediate_dir_count,
            immediate_file_count,
            total_dir_count,
            total_file_count,
            signature: Some(signature),
            state: NodeState::Read,
        }
    }

    /// A directory whose contents were not read because of the depth limit.
    pub fn depth_limited(name: String, path: PathBuf, depth: usize) -> Self {
        let signature = hasher::compute_depth_limited_signature(&path);
        Self::empty(name, path, depth, signature, NodeState::DepthLimited)
    }

    /// A directory whose listing failed.
    pub fn unreadable(name: String, path: PathBuf, depth: usize, error: ReadError) -> Self {
        let signature = hasher::compute_unreadable_signature(&path, &error);
        Self::empty(name, path, depth, signature, NodeState::Unreadable(error))
    }

    fn empty(
        name: String,
        path: PathBuf,
        depth: usize,
        signature: Signature,
        state: NodeState,
    ) -> Self {
        Self {
            name,
            path,
            depth,
            children: Vec::new(),
            files: Vec::new(),
            hidden_file_count: 0,
            immediate_dir_count: 0,
            immediate_file_count: 0,
            total_dir_count: 0,
            total_file_count: 0,
            signature: Some(signature),
            state,
        }
    }

    pub fn error(&self) -> Option<&ReadError> {
        match &self.state {
            NodeState::Unreadable(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_depth_limited(&self) -> bool {
        matches!(self.state, NodeState::DepthLimited)
    }

    pub fn is_permission_error(&self) -> bool {
        self.error().is_some_and(ReadError::is_permission_denied)
    }

    /// Look up a direct subdirectory by name.
    pub fn child(&self, name: &str) -> Option<&DirectoryNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Follow a `/`-separated chain of subdirectory names.
    pub fn descendant(&self, relative: &str) -> Option<&DirectoryNode> {
        relative
            .split('/')
            .filter(|part| !part.is_empty())
            .try_fold(self, |node, part| node.child(part))
    }
}
