//! Data sources supplying tree rows.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MapperError, Result};

use super::node::TreeNode;

/// Supplies the rows of a whole tree.
///
/// Rows must come back sorted ascending by `left`, with `extra` holding only
/// the requested columns.
pub trait NodeSource {
    fn fetch(&self, columns: &[String]) -> Result<Vec<TreeNode>>;
}

/// Sort by `left` and strip every extra column not in `columns`.
pub(crate) fn prepare(mut nodes: Vec<TreeNode>, columns: &[String]) -> Vec<TreeNode> {
    nodes.sort_by_key(|n| n.left);
    for node in &mut nodes {
        node.extra.retain(|key, _| columns.iter().any(|c| c == key));
    }
    nodes
}

/// Vector-backed source.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    nodes: Vec<TreeNode>,
}

impl MemorySource {
    pub fn new(nodes: Vec<TreeNode>) -> Self {
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl NodeSource for MemorySource {
    fn fetch(&self, columns: &[String]) -> Result<Vec<TreeNode>> {
        Ok(prepare(self.nodes.clone(), columns))
    }
}

/// Reads a JSON array of node objects from disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NodeSource for JsonFileSource {
    fn fetch(&self, columns: &[String]) -> Result<Vec<TreeNode>> {
        let content = fs::read_to_string(&self.path).map_err(|e| MapperError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        let nodes: Vec<TreeNode> =
            serde_json::from_str(&content).map_err(|e| MapperError::Parse {
                path: self.path.clone(),
                source: e,
            })?;

        tracing::debug!(path = %self.path.display(), count = nodes.len(), "Loaded tree rows");

        Ok(prepare(nodes, columns))
    }
}
