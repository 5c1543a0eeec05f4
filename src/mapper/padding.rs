//! Depth reconstruction from nested-set boundaries.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::node::{NodeId, TreeNode};

/// Default spacer repeated once per nesting level.
pub const DEFAULT_SPACER: &str = "&nbsp; &nbsp; &nbsp;";

/// Default glyph closing every row's padding.
pub const DEFAULT_BRANCH: &str = "&nbsp; &#8627; &nbsp;";

/// Which way the padding moved for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Inside the previous node's interval: one level deeper.
    Descend,
    /// Past a closed subtree: padding restored from the parent cache.
    Ascend,
    /// Directly after the previous node: same depth.
    Sibling,
}

/// Spacer and branch strings for one flattening pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub spacer: String,
    pub branch: String,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            spacer: DEFAULT_SPACER.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

impl Padding {
    /// Build padding, substituting the defaults for empty strings.
    pub fn resolve(spacer: &str, branch: &str) -> Self {
        let pick = |value: &str, default: &str| {
            if value.is_empty() {
                default.to_string()
            } else {
                value.to_string()
            }
        };

        Self {
            spacer: pick(spacer, DEFAULT_SPACER),
            branch: pick(branch, DEFAULT_BRANCH),
        }
    }
}

/// Rolling state of a single pass. Never shared between passes.
#[derive(Debug, Clone)]
pub struct PaddingState {
    last_right: u64,
    current: String,
    by_parent: HashMap<NodeId, String>,
}

impl Default for PaddingState {
    fn default() -> Self {
        Self::new()
    }
}

impl PaddingState {
    pub fn new() -> Self {
        let mut by_parent = HashMap::new();
        by_parent.insert(NodeId::ROOT, String::new());

        Self {
            last_right: 0,
            current: String::new(),
            by_parent,
        }
    }

    /// Update the padding for `node` and return it.
    ///
    /// Must be called once per node, in ascending `left` order, before the
    /// node's row is built.
    pub fn advance(&mut self, node: &TreeNode, spacer: &str) -> (Step, &str) {
        let step = if node.left < self.last_right {
            self.current.push_str(spacer);
            self.by_parent.insert(node.parent_id, self.current.clone());
            Step::Descend
        } else if node.left > self.last_right.saturating_add(1) {
            self.current = self
                .by_parent
                .get(&node.parent_id)
                .cloned()
                .unwrap_or_default();
            Step::Ascend
        } else {
            // Contiguous sibling: the parent cache is deliberately left alone.
            Step::Sibling
        };

        self.last_right = node.right;
        (step, &self.current)
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn last_right(&self) -> u64 {
        self.last_right
    }

    /// Cached padding for children of `parent`, if that branch was entered.
    pub fn for_parent(&self, parent: NodeId) -> Option<&str> {
        self.by_parent.get(&parent).map(String::as_str)
    }
}
