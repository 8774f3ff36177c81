//! Directory tree walking logic
//!
//! `TreeWalker` builds the full filtered tree in memory. The diagram, the
//! file list and the JSON document are all rendered from that one tree, so
//! `FilterPolicy` is applied in exactly one place.

mod config;
mod filter;
mod node;
mod utils;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use filter::{FilterPolicy, extension_of};
pub use node::TreeNode;
pub use utils::{display_name, validate_root};
pub use walker::TreeWalker;
