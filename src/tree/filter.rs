//! Ignore/include rules applied to every entry during a walk

use std::collections::HashSet;
use std::path::Path;

use super::config::WalkerConfig;

/// Decides whether a single directory entry is visible.
///
/// Directories are matched by base name against the ignore set; files are
/// matched by extension against the allow set. Both checks are exact and
/// case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct FilterPolicy {
    ignore_dirs: HashSet<String>,
    filter_exts: HashSet<String>,
}

impl FilterPolicy {
    pub fn new<I, E>(ignore_dirs: I, filter_exts: E) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            ignore_dirs: ignore_dirs.into_iter().map(Into::into).collect(),
            filter_exts: filter_exts.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &WalkerConfig) -> Self {
        Self::new(config.ignore_dirs.iter().cloned(), config.filter_exts.iter().cloned())
    }

    /// A directory is excluded iff its name is in the ignore set.
    pub fn is_dir_included(&self, name: &str) -> bool {
        !self.ignore_dirs.contains(name)
    }

    /// A file is excluded iff an allow set exists and its extension is not in it.
    pub fn is_file_included(&self, name: &str) -> bool {
        self.filter_exts.is_empty() || self.filter_exts.contains(&extension_of(name))
    }
}

/// The final extension of a file name including the dot, or "" if it has none.
/// Leading-dot names like ".bashrc" have no extension.
pub fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}
