//! Configuration types for the tree walker

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Directory base names to skip anywhere in the walk (exact match).
    pub ignore_dirs: Vec<String>,
    /// Allowed file extensions including the leading dot, e.g. ".txt".
    /// Empty means every extension is allowed.
    pub filter_exts: Vec<String>,
    /// Attach size and modification time to file nodes.
    pub collect_metadata: bool,
}

impl WalkerConfig {
    pub fn new(ignore_dirs: &[String], filter_exts: &[String]) -> Self {
        Self {
            ignore_dirs: ignore_dirs.to_vec(),
            filter_exts: filter_exts.to_vec(),
            collect_metadata: false,
        }
    }

    pub fn with_metadata(mut self, collect: bool) -> Self {
        self.collect_metadata = collect;
        self
    }
}
