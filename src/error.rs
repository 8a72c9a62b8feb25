//! Error types for tree-pro.

use serde::Serialize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Category of a failed directory read.
///
/// Permission problems are kept apart so they can be rendered with a
/// dedicated label; everything else is opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadErrorKind {
    NotFound,
    PermissionDenied,
    Other,
}

impl ReadErrorKind {
    pub fn from_io(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ReadErrorKind::NotFound,
            io::ErrorKind::PermissionDenied => ReadErrorKind::PermissionDenied,
            _ => ReadErrorKind::Other,
        }
    }

    /// Stable token used when hashing error signatures.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadErrorKind::NotFound => "not_found",
            ReadErrorKind::PermissionDenied => "permission_denied",
            ReadErrorKind::Other => "other",
        }
    }
}

/// A directory could not be listed.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct ReadError {
    pub kind: ReadErrorKind,
    pub message: String,
}

impl ReadError {
    pub fn new(kind: ReadErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::new(ReadErrorKind::PermissionDenied, message)
    }

    pub fn is_permission_denied(&self) -> bool {
        self.kind == ReadErrorKind::PermissionDenied
    }
}

impl From<io::Error> for ReadError {
    fn from(err: io::Error) -> Self {
        Self::new(ReadErrorKind::from_io(&err), err.to_string())
    }
}

impl From<walkdir::Error> for ReadError {
    fn from(err: walkdir::Error) -> Self {
        match err.io_error() {
            Some(io_err) => Self::new(ReadErrorKind::from_io(io_err), io_err.to_string()),
            None => Self::new(ReadErrorKind::Other, err.to_string()),
        }
    }
}

/// Failures that abort a whole walk. Only the root can produce these.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("{}: no such file or directory", .path.display())]
    RootNotFound { path: PathBuf },

    #[error("{}: {}", .path.display(), .source)]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: ReadError,
    },

    #[error("{} is not a directory", .path.display())]
    RootNotADirectory { path: PathBuf },
}

impl WalkError {
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, WalkError::RootUnreadable { source, .. } if source.is_permission_denied())
    }
}

/// Application-level errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Walk(#[from] WalkError),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
