//! Path normalization and naming helpers

use std::path::{Component, Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Lexically clean a path without touching the filesystem.
///
/// Collapses repeated separators and `.` components and drops trailing
/// separators. `..` is kept as-is. An empty path cleans to `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let cleaned: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

/// Resolve a path for traversal: canonical when possible, lexically cleaned otherwise.
pub fn resolve_path(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| clean_path(path))
}

/// Display name of a directory: its final component, or the whole path for
/// roots such as `.` or `/`.
pub fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}

/// Normalize a path string for hashing.
///
/// Unicode is normalized to NFC and trailing separators are removed (except
/// for the filesystem root), so equivalent spellings hash identically.
pub fn normalize_path_string(path: &str) -> String {
    let mut result: String = path.nfc().collect();
    if result.len() > 1 {
        while result.len() > 1 && (result.ends_with('/') || result.ends_with('\\')) {
            result.pop();
        }
    }
    result
}
