//! CLI output: error mapping from domain errors to the CLI surface.

use crate::error::{ApiError, WalkError};

/// Map an application error to the message printed on stderr.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Walk(WalkError::RootUnreadable { path, source }) if source.is_permission_denied() => {
            format!("{}: permission denied", path.display())
        }
        _ => e.to_string(),
    }
}
