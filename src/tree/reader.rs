//! Directory listing primitive used by the walker

use crate::error::ReadError;
use crate::tree::path;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Kind of a listed entry. Anything that is not a directory counts as a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadEntry {
    pub name: OsString,
    pub kind: EntryKind,
}

impl ReadEntry {
    pub fn directory(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn file(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }
}

/// Source of directory listings.
///
/// Entries may come back in any order; the walker sorts them.
pub trait DirectoryReader {
    /// Report what lives at `path`, following symlinks.
    fn probe(&self, path: &Path) -> Result<EntryKind, ReadError>;

    /// List the immediate entries of the directory at `path`.
    fn read_dir(&self, path: &Path) -> Result<Vec<ReadEntry>, ReadError>;

    /// Resolve a user-supplied root path before traversal.
    fn resolve(&self, path: &Path) -> PathBuf {
        path.to_path_buf()
    }
}

/// Reads the real filesystem.
///
/// Symbolic links below the root are not followed: a link to a directory is
/// listed as a file.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl DirectoryReader for FsReader {
    fn probe(&self, path: &Path) -> Result<EntryKind, ReadError> {
        let metadata = std::fs::metadata(path)?;
        if metadata.is_dir() {
            Ok(EntryKind::Directory)
        } else {
            Ok(EntryKind::File)
        }
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<ReadEntry>, ReadError> {
        WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .into_iter()
            .map(|entry| -> Result<ReadEntry, ReadError> {
                let entry = entry?;
                let kind = if entry.file_type().is_dir() {
                    EntryKind::Directory
                } else {
                    EntryKind::File
                };
                Ok(ReadEntry {
                    name: entry.file_name().to_os_string(),
                    kind,
                })
            })
            .collect()
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        path::resolve_path(path)
    }
}
