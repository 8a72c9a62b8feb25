//! Depth-first walker that builds the annotated directory tree

use crate::error::{ReadErrorKind, WalkError};
use crate::tree::hasher::ExtensionHistogram;
use crate::tree::node::{DirectoryNode, FileEntry};
use crate::tree::path;
use crate::tree::reader::{DirectoryReader, EntryKind, FsReader};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument, trace, warn};

/// Walk limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkOptions {
    /// Files retained per directory (None = unlimited). Files beyond the
    /// limit are still counted and fingerprinted.
    pub max_files_per_dir: Option<usize>,
    /// Directories at depth < N are expanded; their subdirectories at depth N
    /// are recorded without being read (None = unlimited).
    pub max_depth: Option<NonZeroUsize>,
}

impl WalkOptions {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_files(mut self, max_files: usize) -> Self {
        self.max_files_per_dir = Some(max_files);
        self
    }

    pub fn with_max_depth(mut self, max_depth: NonZeroUsize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    fn expands(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth < max.get())
    }

    fn retains_file(&self, retained: usize) -> bool {
        self.max_files_per_dir.map_or(true, |max| retained < max)
    }
}

/// Filesystem walker
pub struct Walker<R = FsReader> {
    reader: R,
    options: WalkOptions,
}

impl Walker<FsReader> {
    /// Create a walker over the real filesystem
    pub fn new(options: WalkOptions) -> Self {
        Self::with_reader(FsReader, options)
    }
}

impl<R: DirectoryReader> Walker<R> {
    /// Create a walker with a custom directory reader
    pub fn with_reader(reader: R, options: WalkOptions) -> Self {
        Self { reader, options }
    }

    pub fn options(&self) -> &WalkOptions {
        &self.options
    }

    /// Walk the tree rooted at `root`.
    ///
    /// Fails only when the root itself is missing, unreadable or not a
    /// directory. Failures below the root are recorded on the affected node.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn walk(&self, root: &Path) -> Result<DirectoryNode, WalkError> {
        let start = Instant::now();
        info!(
            max_files = ?self.options.max_files_per_dir,
            max_depth = ?self.options.max_depth,
            "Starting walk"
        );

        match self.reader.probe(root) {
            Ok(EntryKind::Directory) => {}
            Ok(EntryKind::File) => {
                return Err(WalkError::RootNotADirectory {
                    path: root.to_path_buf(),
                })
            }
            Err(err) if err.kind == ReadErrorKind::NotFound => {
                return Err(WalkError::RootNotFound {
                    path: root.to_path_buf(),
                })
            }
            Err(err) => {
                return Err(WalkError::RootUnreadable {
                    path: root.to_path_buf(),
                    source: err,
                })
            }
        }

        let resolved = self.reader.resolve(root);
        let name = path::display_name(&path::clean_path(root));
        let node = self.walk_dir(resolved, name, 0);

        if let Some(err) = node.error() {
            warn!(error = %err, "Root directory could not be read");
            return Err(WalkError::RootUnreadable {
                path: root.to_path_buf(),
                source: err.clone(),
            });
        }

        info!(
            total_dirs = node.total_dir_count,
            total_files = node.total_file_count,
            duration_ms = start.elapsed().as_millis(),
            "Walk completed"
        );
        Ok(node)
    }

    /// Post-order construction of one directory: children are finished
    /// (signatures included) before this node is built.
    fn walk_dir(&self, dir_path: PathBuf, name: String, depth: usize) -> DirectoryNode {
        trace!(path = %dir_path.display(), depth, "Visiting directory");

        let mut entries = match self.reader.read_dir(&dir_path) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(path = %dir_path.display(), error = %err, "Directory unreadable");
                return DirectoryNode::unreadable(name, dir_path, depth, err);
            }
        };
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let mut histogram = ExtensionHistogram::new();
        let mut children = Vec::new();
        let mut files = Vec::new();
        let mut hidden_file_count = 0;

        for entry in entries {
            let child_path = dir_path.join(&entry.name);
            let entry_name = entry.name.to_string_lossy().into_owned();

            match entry.kind {
                EntryKind::Directory if self.options.expands(depth + 1) => {
                    children.push(self.walk_dir(child_path, entry_name, depth + 1));
                }
                EntryKind::Directory => {
                    children.push(DirectoryNode::depth_limited(
                        entry_name,
                        child_path,
                        depth + 1,
                    ));
                }
                EntryKind::File => {
                    histogram.record(&entry_name);
                    if self.options.retains_file(files.len()) {
                        files.push(FileEntry::new(entry_name));
                    } else {
                        hidden_file_count += 1;
                    }
                }
            }
        }

        DirectoryNode::from_listing(
            name,
            dir_path,
            depth,
            children,
            files,
            hidden_file_count,
            &histogram,
        )
    }
}
