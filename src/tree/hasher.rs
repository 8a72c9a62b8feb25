//! Structural fingerprints for directories using BLAKE3
//!
//! A directory's signature summarizes its shape: how many immediate files it
//! holds per extension, and the signatures of its immediate subdirectories.
//! File names and contents never take part, so two directories holding
//! `a.go` and `b.go` respectively are considered identical. This is a
//! display-collapsing heuristic, not a content identity.
//!
//! Every variable-length field is length-prefixed (8 bytes, big-endian) so
//! that no two distinct inputs share a byte encoding.

use crate::error::ReadError;
use crate::tree::path;
use crate::types::{Hash, Signature};
use blake3::Hasher;
use std::collections::BTreeMap;
use std::path::Path;

/// Extension token for files without a `.` in their name.
pub const NO_EXTENSION: &str = "<noext>";

const TAG_DIRECTORY: &str = "d";
const TAG_DEPTH_LIMITED: &str = "l";
const TAG_UNREADABLE: &str = "e";
const TAG_FALLBACK: &str = "n";

/// Normalized extension of a file name.
///
/// The suffix starting at the last `.` (inclusive), lower-cased. A dotfile
/// like `.bashrc` is its own extension.
pub fn normalized_extension(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(idx) => file_name[idx..].to_lowercase(),
        None => NO_EXTENSION.to_string(),
    }
}

/// Count of immediate files per normalized extension.
///
/// Backed by a `BTreeMap` so iteration is already in lexicographic order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtensionHistogram {
    counts: BTreeMap<String, u64>,
}

impl ExtensionHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one file by name.
    pub fn record(&mut self, file_name: &str) {
        *self
            .counts
            .entry(normalized_extension(file_name))
            .or_insert(0) += 1;
    }

    /// Number of recorded files with the given normalized extension.
    pub fn count(&self, extension: &str) -> u64 {
        self.counts.get(extension).copied().unwrap_or(0)
    }

    /// Total number of recorded files.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(extension, count)` pairs in lexicographic extension order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(ext, count)| (ext.as_str(), *count))
    }
}

impl<'a> FromIterator<&'a str> for ExtensionHistogram {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut histogram = Self::new();
        for name in iter {
            histogram.record(name);
        }
        histogram
    }
}

/// Signature of a successfully read directory.
///
/// signature = hash("directory" || ext_count || (len || ext || count)* ||
///                  child_count || (len || child_signature)*)
///
/// Child signatures are sorted before hashing, so the result does not depend
/// on the order in which subdirectories were listed.
pub fn compute_directory_signature(
    histogram: &ExtensionHistogram,
    child_signatures: &[&Signature],
) -> Signature {
    let mut hasher = Hasher::new();

    // Hash type discriminator
    hasher.update(b"directory");

    hasher.update(&(histogram.counts.len() as u64).to_be_bytes());
    for (extension, count) in histogram.iter() {
        update_field(&mut hasher, extension.as_bytes());
        hasher.update(&count.to_be_bytes());
    }

    let mut children: Vec<&Signature> = child_signatures.to_vec();
    children.sort();

    hasher.update(&(children.len() as u64).to_be_bytes());
    for signature in children {
        update_field(&mut hasher, signature.as_str().as_bytes());
    }

    Signature::from_digest(TAG_DIRECTORY, &finalize(hasher))
}

/// Signature of a directory recorded but never read because the depth limit
/// was reached. Derived from its path alone, so such leaves never match one
/// another or any directory whose contents are known.
pub fn compute_depth_limited_signature(dir_path: &Path) -> Signature {
    let mut hasher = Hasher::new();
    hasher.update(b"depth-limited");
    update_path(&mut hasher, dir_path);
    Signature::from_digest(TAG_DEPTH_LIMITED, &finalize(hasher))
}

/// Signature of a directory whose listing failed, derived from its path and
/// the error category.
pub fn compute_unreadable_signature(dir_path: &Path, error: &ReadError) -> Signature {
    let mut hasher = Hasher::new();
    hasher.update(b"unreadable");
    update_path(&mut hasher, dir_path);
    update_field(&mut hasher, error.kind.as_str().as_bytes());
    Signature::from_digest(TAG_UNREADABLE, &finalize(hasher))
}

/// Stand-in signature for a node that has none, unique to its name and depth.
pub fn compute_fallback_signature(name: &str, depth: usize) -> Signature {
    let mut hasher = Hasher::new();
    hasher.update(b"fallback");
    update_field(&mut hasher, name.as_bytes());
    hasher.update(&(depth as u64).to_be_bytes());
    Signature::from_digest(TAG_FALLBACK, &finalize(hasher))
}

fn update_path(hasher: &mut Hasher, dir_path: &Path) {
    let normalized = path::normalize_path_string(&dir_path.to_string_lossy());
    update_field(hasher, normalized.as_bytes());
}

fn update_field(hasher: &mut Hasher, bytes: &[u8]) {
    hasher.update(&(bytes.len() as u64).to_be_bytes());
    hasher.update(bytes);
}

fn finalize(hasher: Hasher) -> Hash {
    *hasher.finalize().as_bytes()
}
