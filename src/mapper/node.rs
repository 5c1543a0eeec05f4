//! Input records read from a data source.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Opaque node identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Synthetic parent of every top-level node.
    pub const ROOT: NodeId = NodeId(0);

    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId(id)
    }
}

/// Classification deciding whether and how a node is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Selectable node, emitted with its id.
    Leaf,
    /// Organizational node, emitted without an id.
    Category,
    /// Anything else (links and unknown types). Never emitted.
    Other,
}

impl NodeKind {
    /// Map a forum-table type code: 0 is a category, 1 a postable forum.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => NodeKind::Category,
            1 => NodeKind::Leaf,
            _ => NodeKind::Other,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "leaf" | "post" | "forum" => NodeKind::Leaf,
            "category" | "cat" => NodeKind::Category,
            _ => NodeKind::Other,
        }
    }
}

impl<'de> Deserialize<'de> for NodeKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawKind {
            Code(i64),
            Name(String),
        }

        Ok(match RawKind::deserialize(deserializer)? {
            RawKind::Code(code) => NodeKind::from_code(code),
            RawKind::Name(name) => NodeKind::from_name(&name),
        })
    }
}

/// One row of a nested-set tree.
///
/// `left` and `right` bound the node's interval; a descendant's interval lies
/// strictly inside its ancestor's. Well-formedness is the data source's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    #[serde(alias = "forum_id")]
    pub id: NodeId,

    #[serde(default, alias = "parentId")]
    pub parent_id: NodeId,

    #[serde(alias = "left_id")]
    pub left: u64,

    #[serde(alias = "right_id")]
    pub right: u64,

    #[serde(alias = "type", alias = "forum_type")]
    pub kind: NodeKind,

    #[serde(alias = "forum_name")]
    pub name: String,

    /// Caller-defined columns, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TreeNode {
    pub fn new(
        id: u64,
        parent_id: u64,
        left: u64,
        right: u64,
        kind: NodeKind,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: NodeId(id),
            parent_id: NodeId(parent_id),
            left,
            right,
            kind,
            name: name.into(),
            extra: Map::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Interval width; 1 for a node without descendants.
    pub fn width(&self) -> u64 {
        self.right.saturating_sub(self.left)
    }

    pub fn is_leaf_interval(&self) -> bool {
        self.width() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_from_code() {
        assert_eq!(NodeKind::from_code(0), NodeKind::Category);
        assert_eq!(NodeKind::from_code(1), NodeKind::Leaf);
        assert_eq!(NodeKind::from_code(2), NodeKind::Other);
        assert_eq!(NodeKind::from_code(-1), NodeKind::Other);
    }

    #[test]
    fn test_kind_from_name() {
        assert_eq!(NodeKind::from_name("leaf"), NodeKind::Leaf);
        assert_eq!(NodeKind::from_name("Forum"), NodeKind::Leaf);
        assert_eq!(NodeKind::from_name("CATEGORY"), NodeKind::Category);
        assert_eq!(NodeKind::from_name("link"), NodeKind::Other);
    }

    #[test]
    fn test_deserialize_node_with_extra_columns() {
        let node: TreeNode = serde_json::from_value(json!({
            "id": 5,
            "parent_id": 2,
            "left": 3,
            "right": 4,
            "kind": "leaf",
            "name": "General",
            "enabled": true
        }))
        .unwrap();

        assert_eq!(node.id, NodeId(5));
        assert_eq!(node.parent_id, NodeId(2));
        assert_eq!(node.kind, NodeKind::Leaf);
        assert_eq!(node.extra.get("enabled"), Some(&json!(true)));
        assert_eq!(node.extra.len(), 1);
    }

    #[test]
    fn test_deserialize_forum_table_row() {
        let node: TreeNode = serde_json::from_value(json!({
            "forum_id": 1,
            "forum_type": 0,
            "forum_name": "Announcements",
            "left_id": 1,
            "right_id": 6
        }))
        .unwrap();

        assert_eq!(node.kind, NodeKind::Category);
        assert!(node.parent_id.is_root());
        assert_eq!(node.width(), 5);
        assert!(!node.is_leaf_interval());
    }

    #[test]
    fn test_builder() {
        let node = TreeNode::new(3, 0, 1, 2, NodeKind::Leaf, "Solo").with_extra("value", 7);
        assert!(node.is_leaf_interval());
        assert_eq!(node.extra["value"], json!(7));
    }
}
