//! Row decoration hooks.

use serde_json::{Map, Value};

use super::node::TreeNode;

/// Supplies extra fields for each emitted row.
///
/// Called once per emitted row with the raw node; dropped nodes are never seen.
/// Implementations must not depend on call order.
pub trait Decorate {
    /// Additional fields for the row built from `node`.
    fn decorate(&self, node: &TreeNode) -> Option<Map<String, Value>>;

    /// Extra columns the data source should supply for `decorate` to read.
    fn columns(&self) -> Vec<String> {
        Vec::new()
    }
}

impl<F> Decorate for F
where
    F: Fn(&TreeNode) -> Option<Map<String, Value>>,
{
    fn decorate(&self, node: &TreeNode) -> Option<Map<String, Value>> {
        self(node)
    }
}

/// Adds nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDecoration;

impl Decorate for NoDecoration {
    fn decorate(&self, _node: &TreeNode) -> Option<Map<String, Value>> {
        None
    }
}

/// Copies selected extra columns of each node onto its row.
#[derive(Debug, Clone, Default)]
pub struct ColumnDecorator {
    columns: Vec<String>,
}

impl ColumnDecorator {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Decorate for ColumnDecorator {
    fn decorate(&self, node: &TreeNode) -> Option<Map<String, Value>> {
        let attrs: Map<String, Value> = self
            .columns
            .iter()
            .filter_map(|col| node.extra.get(col).map(|v| (col.clone(), v.clone())))
            .collect();

        if attrs.is_empty() {
            None
        } else {
            Some(attrs)
        }
    }

    fn columns(&self) -> Vec<String> {
        self.columns.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::node::NodeKind;
    use serde_json::json;

    fn sample() -> TreeNode {
        TreeNode::new(1, 0, 1, 2, NodeKind::Leaf, "Forum")
            .with_extra("enabled", true)
            .with_extra("value", "x")
    }

    #[test]
    fn test_no_decoration() {
        assert!(NoDecoration.decorate(&sample()).is_none());
        assert!(NoDecoration.columns().is_empty());
    }

    #[test]
    fn test_closure_decorator() {
        let deco = |node: &TreeNode| {
            let mut map = Map::new();
            map.insert("label".to_string(), json!(node.name.to_uppercase()));
            Some(map)
        };
        let attrs = deco.decorate(&sample()).unwrap();
        assert_eq!(attrs["label"], json!("FORUM"));
    }

    #[test]
    fn test_column_decorator_copies_known_columns() {
        let deco = ColumnDecorator::new(["enabled", "missing"]);
        let attrs = deco.decorate(&sample()).unwrap();

        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs["enabled"], json!(true));
        assert_eq!(deco.columns(), vec!["enabled".to_string(), "missing".to_string()]);
    }

    #[test]
    fn test_column_decorator_without_matches() {
        let deco = ColumnDecorator::new(["absent"]);
        assert!(deco.decorate(&sample()).is_none());
        assert!(!deco.is_empty());
        assert!(ColumnDecorator::default().is_empty());
    }
}
