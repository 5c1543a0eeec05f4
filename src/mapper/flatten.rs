//! Single-pass flattening of a nested-set tree into display rows.

use crate::error::Result;

use super::decorate::Decorate;
use super::node::{NodeKind, TreeNode};
use super::padding::{Padding, PaddingState};
use super::row::DisplayRow;
use super::source::NodeSource;

/// Flatten `nodes` (sorted ascending by `left`) into indented rows.
///
/// Empty `spacer` or `branch` fall back to the default padding strings.
/// Nodes of kind [`NodeKind::Other`] produce no row and are not decorated.
/// Malformed intervals yield wrong padding, never a panic.
pub fn flatten<D>(nodes: &[TreeNode], spacer: &str, branch: &str, decorate: &D) -> Vec<DisplayRow>
where
    D: Decorate + ?Sized,
{
    let padding = Padding::resolve(spacer, branch);
    let mut state = PaddingState::new();
    let mut rows = Vec::with_capacity(nodes.len());

    for node in nodes {
        let (step, current) = state.advance(node, &padding.spacer);
        tracing::trace!(id = %node.id, left = node.left, right = node.right, ?step, "Padding updated");

        let row_padding = format!("{}{}", current, padding.branch);
        let mut row = match node.kind {
            NodeKind::Category => DisplayRow::category(row_padding, node.name.as_str()),
            NodeKind::Leaf => DisplayRow::leaf(row_padding, node.name.as_str(), node.id),
            NodeKind::Other => continue,
        };

        if let Some(attrs) = decorate.decorate(node) {
            row.merge(attrs);
        }

        if !row.is_empty() {
            rows.push(row);
        }
    }

    tracing::debug!(nodes = nodes.len(), rows = rows.len(), "Flattened tree");
    rows
}

/// Fetches a tree from a source and flattens it in one call.
#[derive(Debug, Clone)]
pub struct TreeMapper<S> {
    source: S,
}

impl<S: NodeSource> TreeMapper<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the columns `decorate` asks for, then flatten.
    pub fn run<D>(&self, spacer: &str, branch: &str, decorate: &D) -> Result<Vec<DisplayRow>>
    where
        D: Decorate + ?Sized,
    {
        let columns = decorate.columns();
        let nodes = self.source.fetch(&columns)?;
        Ok(flatten(&nodes, spacer, branch, decorate))
    }
}
