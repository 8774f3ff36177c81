//! Tree formatting and export
//!
//! This module provides the three renderings of a walked tree:
//! - `TreeFormatter` - indented diagram, optionally emoji-decorated and colored
//! - `PathLister` - flat list of absolute file paths
//! - `JsonExporter` - nested JSON document persisted to disk

mod config;
mod json;
mod list;
mod tree;

// Re-export public types and functions
pub use config::OutputConfig;
pub use json::{
    DEFAULT_SAVE_SUFFIX, JsonExporter, JsonNode, NodeKind, UPDATED_FORMAT, default_save_path,
    validate_save_path,
};
pub use list::PathLister;
pub use tree::{EMPTY_TREE_MESSAGE, TreeFormatter};
