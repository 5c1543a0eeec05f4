use serde::Serialize;
use serde_json::{Map, Value};

use super::node::NodeId;

/// Keys owned by the core row. Decoration may never overwrite them.
pub const CORE_KEYS: &[&str] = &["is_category", "padding", "name", "id"];

/// One output row, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow {
    pub is_category: bool,
    pub padding: String,
    pub name: String,
    /// Present for leaf rows only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<NodeId>,
    /// Decoration fields, serialized alongside the core fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DisplayRow {
    pub fn category(padding: String, name: impl Into<String>) -> Self {
        Self {
            is_category: true,
            padding,
            name: name.into(),
            id: None,
            extra: Map::new(),
        }
    }

    pub fn leaf(padding: String, name: impl Into<String>, id: NodeId) -> Self {
        Self {
            is_category: false,
            padding,
            name: name.into(),
            id: Some(id),
            extra: Map::new(),
        }
    }

    /// Merge decoration attributes into the row.
    ///
    /// Decoration is additive only: keys colliding with a core key are dropped.
    /// Returns the number of attributes kept.
    pub fn merge(&mut self, attrs: Map<String, Value>) -> usize {
        let mut kept = 0;
        for (key, value) in attrs {
            if CORE_KEYS.contains(&key.as_str()) {
                tracing::debug!(key = %key, row = %self.name, "Ignoring decoration key that shadows a core field");
                continue;
            }
            self.extra.insert(key, value);
            kept += 1;
        }
        kept
    }

    /// True when the row carries neither core content nor decoration.
    pub fn is_empty(&self) -> bool {
        !self.is_category
            && self.id.is_none()
            && self.padding.is_empty()
            && self.name.is_empty()
            && self.extra.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn test_category_has_no_id() {
        let row = DisplayRow::category("pad".into(), "Cat");
        assert!(row.is_category);
        assert_eq!(row.id, None);
    }

    #[test]
    fn test_merge_is_additive() {
        let mut row = DisplayRow::leaf("pad".into(), "Forum", NodeId(4));
        let kept = row.merge(attrs(json!({"enabled": true, "name": "hijack", "id": 99})));

        assert_eq!(kept, 1);
        assert_eq!(row.name, "Forum");
        assert_eq!(row.id, Some(NodeId(4)));
        assert_eq!(row.get("enabled"), Some(&json!(true)));
        assert!(row.get("name").is_none());
    }

    #[test]
    fn test_serialized_field_presence() {
        let leaf = serde_json::to_value(DisplayRow::leaf("p".into(), "L", NodeId(2))).unwrap();
        assert_eq!(leaf, json!({"is_category": false, "padding": "p", "name": "L", "id": 2}));

        let mut cat = DisplayRow::category("p".into(), "C");
        cat.merge(attrs(json!({"enabled": false})));
        let cat = serde_json::to_value(cat).unwrap();
        assert_eq!(cat, json!({"is_category": true, "padding": "p", "name": "C", "enabled": false}));
    }

    #[test]
    fn test_is_empty() {
        let blank = DisplayRow::leaf(String::new(), "", NodeId(1));
        assert!(!blank.is_empty());

        let mut nothing = blank.clone();
        nothing.id = None;
        assert!(nothing.is_empty());
    }
}
