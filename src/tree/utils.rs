//! Shared utility functions for tree walking

use std::fs::Metadata;
use std::io;
use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::{Result, WintreeError};

/// Check that `root` exists and is a directory, returning its absolute form.
///
/// The absolute path is normalized lexically: `.` is dropped and `..` pops
/// the previous component. Symlinks are not resolved.
pub fn validate_root(root: &Path) -> Result<PathBuf> {
    if !root.exists() {
        return Err(WintreeError::invalid_path(format!(
            "Path '{}' does not exist",
            root.display()
        )));
    }
    if !root.is_dir() {
        return Err(WintreeError::invalid_path(format!(
            "Path '{}' is not a directory",
            root.display()
        )));
    }
    let absolute = std::path::absolute(root).map_err(|e| WintreeError::io(root, e))?;
    Ok(normalize_lexically(&absolute))
}

/// Resolve `.` and `..` components without touching the filesystem.
/// `..` at the root stays at the root.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Base name of a path, falling back to the whole path for roots like "/".
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Size and local modification time from already-fetched metadata.
/// Both or neither: a missing mtime is an error for the caller to handle.
pub fn file_metadata(meta: &Metadata) -> io::Result<(u64, DateTime<Local>)> {
    let modified = meta.modified()?;
    Ok((meta.len(), DateTime::<Local>::from(modified)))
}
