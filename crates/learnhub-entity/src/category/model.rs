//! Category entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A category in the lesson catalog.
///
/// Categories form a forest: multiple roots, each an arbitrarily deep
/// tree linked by weak `parent_id` back-references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique category identifier.
    pub id: Uuid,
    /// Category name.
    pub name: String,
    /// Category description.
    pub description: String,
    /// Parent category ID (None for root categories).
    pub parent_id: Option<Uuid>,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Check if this is a root category (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Merge a partial update into this record.
    pub fn apply(&mut self, updates: UpdateCategory) {
        if let Some(name) = updates.name {
            self.name = name;
        }
        if let Some(description) = updates.description {
            self.description = description;
        }
        if let Some(parent_id) = updates.parent_id {
            self.parent_id = parent_id;
        }
    }
}

/// Data required to create a new category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategory {
    /// Category name.
    pub name: String,
    /// Category description.
    pub description: String,
    /// Parent category (None for root).
    pub parent_id: Option<Uuid>,
}

impl From<CreateCategory> for Category {
    /// Materializes the record with a fresh id and creation timestamp.
    fn from(record: CreateCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: record.name,
            description: record.description,
            parent_id: record.parent_id,
            created_at: Utc::now(),
        }
    }
}

/// Partial update for an existing category.
///
/// The outer `Option` on `parent_id` distinguishes "leave the parent
/// untouched" (`None`) from "set an explicit parent" (`Some(Some(id))`)
/// and "promote to root" (`Some(None)`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCategory {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New parent assignment.
    pub parent_id: Option<Option<Uuid>>,
}
