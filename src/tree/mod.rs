//! Directory tree construction
//!
//! Walks a filesystem subtree into an owned tree of [`node::DirectoryNode`]s,
//! each annotated with untruncated counts and a structural signature computed
//! bottom-up, and groups structurally identical siblings.

pub mod group;
pub mod hasher;
pub mod node;
pub mod path;
pub mod reader;
pub mod walker;

pub use group::{group_identical, DirGroup};
pub use node::{DirectoryNode, FileEntry, NodeState};
pub use reader::{DirectoryReader, EntryKind, FsReader, ReadEntry};
pub use walker::{WalkOptions, Walker};
