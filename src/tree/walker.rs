//! TreeWalker - builds the filtered tree in memory

use std::fs::{self, DirEntry};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Result, WintreeError};

use super::config::WalkerConfig;
use super::filter::FilterPolicy;
use super::node::TreeNode;
use super::utils::{display_name, file_metadata};

/// Tree walker that builds the full filtered tree in memory.
///
/// Every output format consumes the tree this walker produces, so they all
/// see exactly the same set of entries.
pub struct TreeWalker {
    config: WalkerConfig,
    policy: FilterPolicy,
}

/// What an entry turned out to be once inspected.
enum EntryKind {
    Dir,
    File,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        let policy = FilterPolicy::from_config(&config);
        Self { config, policy }
    }

    /// Walk `root`, which must be an absolute, already validated directory.
    ///
    /// The root itself is never filtered. Failing to list the root is fatal;
    /// failures below it only drop the affected entry.
    pub fn walk(&self, root: &Path) -> Result<TreeNode> {
        let entries = self
            .read_sorted_entries(root)
            .map_err(|e| WintreeError::io(root, e))?;
        let children = self.build_children(entries);

        info!(root = %root.display(), entries = children.len(), "walked directory tree");
        Ok(TreeNode::Dir {
            name: display_name(root),
            path: root.to_path_buf(),
            children,
        })
    }

    fn walk_dir(&self, path: &Path, name: String) -> Option<TreeNode> {
        let entries = match self.read_sorted_entries(path) {
            Ok(e) => e,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping unreadable directory");
                return None;
            }
        };

        Some(TreeNode::Dir {
            name,
            path: path.to_path_buf(),
            children: self.build_children(entries),
        })
    }

    /// List a directory's entries sorted by name. The directory handle is
    /// released before any child is visited.
    fn read_sorted_entries(&self, path: &Path) -> std::io::Result<Vec<DirEntry>> {
        let mut entries: Vec<_> = fs::read_dir(path)?
            .filter_map(|entry| match entry {
                Ok(e) => Some(e),
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "skipping unreadable entry");
                    None
                }
            })
            .collect();
        entries.sort_by_key(|a| a.file_name());
        Ok(entries)
    }

    /// Filter entries and recurse into surviving directories.
    /// Directories come first, then files, each group in name order.
    fn build_children(&self, entries: Vec<DirEntry>) -> Vec<TreeNode> {
        let mut dirs = Vec::new();
        let mut files = Vec::new();

        for entry in entries {
            let name = entry.file_name().to_string_lossy().to_string();
            match self.classify(&entry) {
                Some(EntryKind::Dir) => {
                    if self.policy.is_dir_included(&name) {
                        dirs.push((entry, name));
                    }
                }
                Some(EntryKind::File) => {
                    if self.policy.is_file_included(&name) {
                        files.push((entry, name));
                    }
                }
                None => {}
            }
        }

        let mut children = Vec::with_capacity(dirs.len() + files.len());
        for (entry, name) in dirs {
            if let Some(node) = self.walk_dir(&entry.path(), name) {
                children.push(node);
            }
        }
        for (entry, name) in files {
            if let Some(node) = self.file_node(&entry, name) {
                children.push(node);
            }
        }
        children
    }

    /// Work out whether an entry is a directory or a file.
    ///
    /// Symlinks to files count as files. Symlinks to directories are skipped
    /// so a walk can never loop.
    fn classify(&self, entry: &DirEntry) -> Option<EntryKind> {
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping entry without file type");
                return None;
            }
        };

        if file_type.is_dir() {
            return Some(EntryKind::Dir);
        }
        if file_type.is_symlink() {
            return match fs::metadata(&path) {
                Ok(meta) if meta.is_file() => Some(EntryKind::File),
                Ok(_) => {
                    debug!(path = %path.display(), "skipping symlinked directory");
                    None
                }
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "skipping broken symlink");
                    None
                }
            };
        }
        Some(EntryKind::File)
    }

    fn file_node(&self, entry: &DirEntry, name: String) -> Option<TreeNode> {
        let path = entry.path();
        let (size, modified) = if self.config.collect_metadata {
            // Follows symlinks, so a linked file reports its target's size.
            match fs::metadata(&path).and_then(|meta| file_metadata(&meta)) {
                Ok((size, modified)) => (Some(size), Some(modified)),
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "skipping file without metadata");
                    return None;
                }
            }
        } else {
            (None, None)
        };

        Some(TreeNode::File {
            name,
            path,
            size,
            modified,
        })
    }
}
