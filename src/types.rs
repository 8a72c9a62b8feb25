//! Shared value types.

use serde::Serialize;
use std::fmt;

/// 32-byte BLAKE3 digest.
pub type Hash = [u8; 32];

/// Structural signature of a directory.
///
/// Opaque string of the form `<tag>:<hex digest>`. Two directories with equal
/// signatures are treated as interchangeable when rendering. The tag keeps the
/// different derivations (read directory, depth-limited leaf, unreadable
/// directory, grouping fallback) in disjoint spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Signature(String);

impl Signature {
    pub(crate) fn from_digest(tag: &str, digest: &Hash) -> Self {
        Self(format!("{}:{}", tag, hex::encode(digest)))
    }

    /// The signature as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Tag identifying how the signature was derived (`d`, `l`, `e` or `n`).
    pub fn tag(&self) -> &str {
        self.0.split(':').next().unwrap_or_default()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}
