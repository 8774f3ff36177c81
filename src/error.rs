//! Error type shared by every public operation

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by `tree`, `list_files` and `tree_to_json`.
#[derive(Debug, Error)]
pub enum WintreeError {
    /// The root is missing or not a directory, or the save path is not a `.json` file.
    /// Always raised before any traversal or write happens.
    #[error("{0}")]
    InvalidPath(String),

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WintreeError {
    pub fn invalid_path(message: impl Into<String>) -> Self {
        Self::InvalidPath(message.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath(_))
    }
}

pub type Result<T> = std::result::Result<T, WintreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_path_displays_message_verbatim() {
        let err = WintreeError::invalid_path("Path 'nope' does not exist");
        assert_eq!(err.to_string(), "Path 'nope' does not exist");
        assert!(err.is_invalid_path());
    }

    #[test]
    fn test_io_error_mentions_path() {
        let err = WintreeError::io(
            "/tmp/out.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/out.json"), "got: {}", msg);
        assert!(msg.contains("denied"));
        assert!(!err.is_invalid_path());
    }
}
