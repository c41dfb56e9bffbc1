//! Category store implementation.

use dashmap::DashMap;
use uuid::Uuid;

use learnhub_entity::category::Category;

/// Arena holding the category forest, indexed by id.
///
/// Parent links are weak references; the store itself does not enforce
/// acyclicity. Walks over the forest live in the service layer and carry
/// visited-set guards.
#[derive(Debug, Default)]
pub struct CategoryStore {
    arena: DashMap<Uuid, Category>,
}

impl CategoryStore {
    /// Create an empty category store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully-formed category record.
    pub fn insert(&self, category: Category) {
        self.arena.insert(category.id, category);
    }

    /// Find a category by ID.
    pub fn find_by_id(&self, id: Uuid) -> Option<Category> {
        self.arena.get(&id).map(|c| c.clone())
    }

    /// Replace an existing record with an updated copy.
    pub fn replace(&self, category: Category) {
        self.arena.insert(category.id, category);
    }

    /// Remove a category, returning the removed record.
    pub fn remove(&self, id: Uuid) -> Option<Category> {
        self.arena.remove(&id).map(|(_, c)| c)
    }

    /// All categories, ordered by name.
    pub fn all(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = self.arena.iter().map(|c| c.clone()).collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        categories
    }

    /// Root categories (no parent), ordered by name.
    pub fn roots(&self) -> Vec<Category> {
        let mut roots: Vec<Category> = self
            .arena
            .iter()
            .filter(|c| c.parent_id.is_none())
            .map(|c| c.clone())
            .collect();
        roots.sort_by(|a, b| a.name.cmp(&b.name));
        roots
    }

    /// Direct children of a category (one level), ordered by name.
    pub fn children(&self, parent_id: Uuid) -> Vec<Category> {
        let mut children: Vec<Category> = self
            .arena
            .iter()
            .filter(|c| c.parent_id == Some(parent_id))
            .map(|c| c.clone())
            .collect();
        children.sort_by(|a, b| a.name.cmp(&b.name));
        children
    }

    /// Whether any category references `parent_id` as its parent.
    pub fn has_children(&self, parent_id: Uuid) -> bool {
        self.arena.iter().any(|c| c.parent_id == Some(parent_id))
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}
