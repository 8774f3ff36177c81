//! Flat file listing

use crate::tree::TreeNode;

/// Lists the absolute path of every file in a walked tree.
pub struct PathLister;

impl PathLister {
    /// One absolute file path per line, in depth-first walk order.
    /// Directories are not listed.
    pub fn format(root: &TreeNode) -> String {
        let mut paths = Vec::new();
        root.for_each_file(&mut |node| paths.push(node.path().display().to_string()));
        paths.join("\n")
    }
}
