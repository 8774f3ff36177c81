//! JSON document export

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, WintreeError};
use crate::tree::TreeNode;

/// Format of the `updated` field on file nodes.
pub const UPDATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Suffix appended to the root path when no save path is given.
pub const DEFAULT_SAVE_SUFFIX: &str = "_tree.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Directory,
    File,
}

/// One node of the exported document.
///
/// Field order is fixed by declaration order, so serializing the same
/// document always yields the same bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonNode {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<JsonNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

impl JsonNode {
    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    pub fn children(&self) -> &[JsonNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Find a direct child by name.
    pub fn child(&self, name: &str) -> Option<&JsonNode> {
        self.children().iter().find(|c| c.name == name)
    }

    /// Pretty-printed form, identical to what `JsonExporter::save` writes.
    pub fn to_pretty_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Converts walked trees into `JsonNode` documents and writes them to disk.
pub struct JsonExporter {
    show_meta: bool,
}

impl JsonExporter {
    pub fn new(show_meta: bool) -> Self {
        Self { show_meta }
    }

    pub fn to_document(&self, node: &TreeNode) -> JsonNode {
        match node {
            TreeNode::Dir { name, children, .. } => JsonNode {
                name: name.clone(),
                kind: NodeKind::Directory,
                children: Some(children.iter().map(|c| self.to_document(c)).collect()),
                size: None,
                updated: None,
            },
            TreeNode::File {
                name,
                size,
                modified,
                ..
            } => {
                let (size, updated) = if self.show_meta {
                    (*size, modified.as_ref().map(|m| m.format(UPDATED_FORMAT).to_string()))
                } else {
                    (None, None)
                };
                JsonNode {
                    name: name.clone(),
                    kind: NodeKind::File,
                    children: None,
                    size,
                    updated,
                }
            }
        }
    }

    /// Write the document, creating any missing parent directories.
    pub fn save(&self, document: &JsonNode, save_path: &Path) -> Result<()> {
        validate_save_path(save_path)?;
        let json = document.to_pretty_string()?;

        if let Some(parent) = save_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| WintreeError::io(parent, e))?;
        }
        fs::write(save_path, json).map_err(|e| WintreeError::io(save_path, e))?;

        info!(path = %save_path.display(), "wrote tree document");
        Ok(())
    }
}

/// The save path's final extension must be exactly `json`.
pub fn validate_save_path(save_path: &Path) -> Result<()> {
    if save_path.extension().is_some_and(|ext| ext == "json") {
        Ok(())
    } else {
        Err(WintreeError::invalid_path(format!(
            "save path must end with '.json': {}",
            save_path.display()
        )))
    }
}

/// `<root>_tree.json`, built from the root as the caller spelled it.
/// Trailing separators are dropped so the file lands next to the root
/// rather than inside it.
pub fn default_save_path(root: &Path) -> PathBuf {
    let raw = root.to_string_lossy();
    let trimmed = raw.trim_end_matches(std::path::is_separator);
    let base = if trimmed.is_empty() { &*raw } else { trimmed };
    PathBuf::from(format!("{}{}", base, DEFAULT_SAVE_SUFFIX))
}
