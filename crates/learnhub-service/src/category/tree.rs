//! Walks over the category forest.
//!
//! Parent links are weak back-references, so every walk carries a
//! visited set: upward path resolution fails fast on a cycle, downward
//! subtree collection skips ids it has already seen.

use std::collections::HashSet;

use uuid::Uuid;

use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;
use learnhub_entity::category::{Category, CategoryNode, CategoryTree};
use learnhub_store::CategoryStore;

/// Separator used in human-readable category paths.
const PATH_SEPARATOR: &str = " > ";

/// Builds the human-readable path for a category by walking parent links
/// upward, e.g. `"Web Development > Frontend"`.
///
/// A dangling parent reference terminates the walk as if the last
/// reachable category were a root. A cyclic parent chain is a structural
/// integrity error.
pub fn path(categories: &CategoryStore, category_id: Uuid) -> AppResult<String> {
    let category = categories
        .find_by_id(category_id)
        .ok_or_else(|| AppError::not_found("Category not found"))?;

    let mut visited = HashSet::from([category.id]);
    let mut segments = vec![category.name];
    let mut cursor = category.parent_id;

    while let Some(parent_id) = cursor {
        if !visited.insert(parent_id) {
            return Err(AppError::integrity(
                "Category hierarchy contains a cycle; path cannot be resolved",
            ));
        }
        match categories.find_by_id(parent_id) {
            Some(parent) => {
                segments.push(parent.name);
                cursor = parent.parent_id;
            }
            // Dangling parent reference: treat the child as a root.
            None => break,
        }
    }

    segments.reverse();
    Ok(segments.join(PATH_SEPARATOR))
}

/// Collects the ids of a category and all its descendants at any depth.
///
/// The visited set makes the collection terminate even if the forest
/// contains a cycle; no id is collected twice.
pub fn subtree_ids(categories: &CategoryStore, category_id: Uuid) -> Vec<Uuid> {
    let mut visited = HashSet::new();
    let mut ids = Vec::new();
    let mut queue = vec![category_id];

    while let Some(id) = queue.pop() {
        if !visited.insert(id) {
            continue;
        }
        ids.push(id);
        for child in categories.children(id) {
            queue.push(child.id);
        }
    }

    ids
}

/// Whether `selected` is `category_id` itself or any of its descendants.
pub fn selection_in_subtree(
    categories: &CategoryStore,
    category_id: Uuid,
    selected: Option<Uuid>,
) -> bool {
    selected.is_some_and(|sel| subtree_ids(categories, category_id).contains(&sel))
}

/// Builds the rendered category forest for the given selection.
///
/// A node reveals its children when it or any descendant at any depth is
/// selected; collapsed nodes carry no child nodes.
pub fn build(categories: &CategoryStore, selected: Option<Uuid>) -> CategoryTree {
    let mut visited = HashSet::new();
    let roots = categories
        .roots()
        .into_iter()
        .map(|root| build_node(categories, root, selected, 0, &mut visited))
        .collect();

    CategoryTree {
        roots,
        total_categories: categories.len(),
    }
}

fn build_node(
    categories: &CategoryStore,
    category: Category,
    selected: Option<Uuid>,
    depth: usize,
    visited: &mut HashSet<Uuid>,
) -> CategoryNode {
    let expanded = selection_in_subtree(categories, category.id, selected);
    let children = if expanded && visited.insert(category.id) {
        categories
            .children(category.id)
            .into_iter()
            .map(|child| build_node(categories, child, selected, depth + 1, visited))
            .collect()
    } else {
        Vec::new()
    };

    CategoryNode {
        id: category.id,
        name: category.name,
        depth,
        selected: selected == Some(category.id),
        expanded,
        children,
    }
}
