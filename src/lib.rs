//! Wintree - render a directory as a tree diagram, a file list, or a JSON document

pub mod error;
pub mod ops;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{Result, WintreeError};
pub use ops::{JsonOptions, ListOptions, TreeOptions, build_tree, list_files, tree, tree_to_json};
pub use output::{JsonExporter, JsonNode, NodeKind, OutputConfig, PathLister, TreeFormatter};
pub use tree::{FilterPolicy, TreeNode, TreeWalker, WalkerConfig};
