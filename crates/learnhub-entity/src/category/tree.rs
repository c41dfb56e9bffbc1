//! Category tree structures for hierarchical display.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A node in a rendered category tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryNode {
    /// Category ID.
    pub id: Uuid,
    /// Category name.
    pub name: String,
    /// Depth level (0 for roots).
    pub depth: usize,
    /// Whether this node is the selected one.
    pub selected: bool,
    /// Whether the node's children are revealed: the node itself or any
    /// descendant at any depth is selected.
    pub expanded: bool,
    /// Child nodes (present only when expanded).
    pub children: Vec<CategoryNode>,
}

/// A complete category forest prepared for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTree {
    /// The root nodes of the forest.
    pub roots: Vec<CategoryNode>,
    /// Total number of categories in the tree.
    pub total_categories: usize,
}
