//! Canonical in-memory tree built by the walker

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// One entry of a walked directory tree.
///
/// `path` is always absolute. `size` and `modified` are only populated
/// when the walker was asked to collect metadata.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    File {
        name: String,
        path: PathBuf,
        size: Option<u64>,
        modified: Option<DateTime<Local>>,
    },
    Dir {
        name: String,
        path: PathBuf,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            TreeNode::File { path, .. } => path,
            TreeNode::Dir { path, .. } => path,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    /// Children of a directory; files have none.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::Dir { children, .. } => children,
            TreeNode::File { .. } => &[],
        }
    }

    /// Visit every file below this node depth-first, in child order.
    pub fn for_each_file<'a>(&'a self, f: &mut impl FnMut(&'a TreeNode)) {
        match self {
            TreeNode::File { .. } => f(self),
            TreeNode::Dir { children, .. } => {
                for child in children {
                    child.for_each_file(f);
                }
            }
        }
    }
}
