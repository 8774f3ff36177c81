//! Public entry points: diagram, file list and JSON export
//!
//! Each call validates its inputs, walks the directory once and renders
//! the result. Nothing is cached between calls.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::output::{
    JsonExporter, JsonNode, OutputConfig, PathLister, TreeFormatter, default_save_path,
    validate_save_path,
};
use crate::tree::{TreeNode, TreeWalker, WalkerConfig, validate_root};

/// Options for [`tree`].
#[derive(Debug, Clone, Default)]
pub struct TreeOptions {
    pub use_emoji: bool,
    pub ignore_dirs: Vec<String>,
    pub filter_exts: Vec<String>,
}

/// Options for [`list_files`].
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub ignore_dirs: Vec<String>,
    pub filter_exts: Vec<String>,
}

/// Options for [`tree_to_json`].
#[derive(Debug, Clone, Default)]
pub struct JsonOptions {
    /// Destination file; defaults to `<root_dir>_tree.json`.
    pub save_path: Option<PathBuf>,
    pub ignore_dirs: Vec<String>,
    pub filter_exts: Vec<String>,
    /// Attach `size` and `updated` to file nodes.
    pub show_meta: bool,
}

/// Validate `root_dir` and build its filtered tree.
pub fn build_tree(root_dir: &Path, config: WalkerConfig) -> Result<TreeNode> {
    let root = validate_root(root_dir)?;
    TreeWalker::new(config).walk(&root)
}

/// Render `root_dir` as an indented diagram.
pub fn tree(root_dir: impl AsRef<Path>, options: &TreeOptions) -> Result<String> {
    let config = WalkerConfig::new(&options.ignore_dirs, &options.filter_exts);
    let root = build_tree(root_dir.as_ref(), config)?;

    let formatter = TreeFormatter::new(OutputConfig {
        use_emoji: options.use_emoji,
        use_color: false,
    });
    Ok(formatter.format(&root))
}

/// List every visible file under `root_dir` as an absolute path, one per line.
pub fn list_files(root_dir: impl AsRef<Path>, options: &ListOptions) -> Result<String> {
    let config = WalkerConfig::new(&options.ignore_dirs, &options.filter_exts);
    let root = build_tree(root_dir.as_ref(), config)?;
    Ok(PathLister::format(&root))
}

/// Export `root_dir` as a JSON document, write it to disk and return it.
///
/// Both the root and the save path are validated before anything is read
/// or written.
pub fn tree_to_json(root_dir: impl AsRef<Path>, options: &JsonOptions) -> Result<JsonNode> {
    let root_dir = root_dir.as_ref();
    let absolute_root = validate_root(root_dir)?;
    let save_path = match &options.save_path {
        Some(path) => path.clone(),
        None => default_save_path(root_dir),
    };
    validate_save_path(&save_path)?;
    debug!(save_path = %save_path.display(), "exporting tree document");

    let config = WalkerConfig::new(&options.ignore_dirs, &options.filter_exts)
        .with_metadata(options.show_meta);
    let root = TreeWalker::new(config).walk(&absolute_root)?;

    let exporter = JsonExporter::new(options.show_meta);
    let document = exporter.to_document(&root);
    exporter.save(&document, &save_path)?;
    Ok(document)
}
