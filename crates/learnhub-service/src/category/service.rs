//! Category CRUD with admin gating and dependent guards.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;
use validator::Validate;

use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;
use learnhub_entity::category::{Category, CategoryTree, CreateCategory, UpdateCategory};
use learnhub_store::{CategoryStore, LessonStore};

use crate::context::CallerContext;

use super::tree;

/// Manages the category forest.
#[derive(Debug)]
pub struct CategoryService {
    /// Category forest.
    categories: Arc<CategoryStore>,
    /// Lesson catalog, consulted for deletion guards.
    lessons: Arc<LessonStore>,
}

/// Request to create a new category.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Validate)]
pub struct CreateCategoryRequest {
    /// Category name.
    #[validate(length(min = 1, message = "Category name cannot be empty"))]
    pub name: String,
    /// Category description.
    pub description: String,
    /// Parent category (None for root).
    pub parent_id: Option<Uuid>,
}

/// Request to update a category.
///
/// `parent_id` uses a double `Option`: `None` leaves the parent alone,
/// `Some(None)` promotes the category to root, `Some(Some(id))` re-parents.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct UpdateCategoryRequest {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New parent assignment.
    pub parent_id: Option<Option<Uuid>>,
}

impl CategoryService {
    /// Creates a new category service.
    pub fn new(categories: Arc<CategoryStore>, lessons: Arc<LessonStore>) -> Self {
        Self {
            categories,
            lessons,
        }
    }

    /// Creates a new category. Admin only.
    pub fn add_category(
        &self,
        caller: &CallerContext,
        req: CreateCategoryRequest,
    ) -> AppResult<Category> {
        if !caller.is_admin() {
            return Err(AppError::authorization("Only admins can manage categories"));
        }

        req.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        if let Some(parent_id) = req.parent_id
            && self.categories.find_by_id(parent_id).is_none()
        {
            return Err(AppError::not_found("Parent category not found"));
        }

        let category = Category::from(CreateCategory {
            name: req.name,
            description: req.description,
            parent_id: req.parent_id,
        });

        info!(caller = %caller.username, name = %category.name, "Category created");

        self.categories.insert(category.clone());
        Ok(category)
    }

    /// Updates a category. Admin only.
    ///
    /// An explicit `Some(None)` parent promotes the category to root.
    /// Re-parenting under the category's own subtree is rejected, since
    /// it would close a cycle in the forest.
    pub fn update_category(
        &self,
        caller: &CallerContext,
        id: Uuid,
        req: UpdateCategoryRequest,
    ) -> AppResult<Category> {
        if !caller.is_admin() {
            return Err(AppError::authorization("Only admins can manage categories"));
        }

        let mut category = self
            .categories
            .find_by_id(id)
            .ok_or_else(|| AppError::not_found("Category not found"))?;

        if let Some(name) = &req.name
            && name.trim().is_empty()
        {
            return Err(AppError::validation("Category name cannot be empty"));
        }

        if let Some(Some(new_parent_id)) = req.parent_id {
            if new_parent_id == id {
                return Err(AppError::validation(
                    "A category cannot be its own parent",
                ));
            }
            if self.categories.find_by_id(new_parent_id).is_none() {
                return Err(AppError::not_found("Parent category not found"));
            }
            if tree::subtree_ids(&self.categories, id).contains(&new_parent_id) {
                return Err(AppError::validation(
                    "Cannot move a category under one of its descendants",
                ));
            }
        }

        category.apply(UpdateCategory {
            name: req.name,
            description: req.description,
            parent_id: req.parent_id,
        });

        self.categories.replace(category.clone());

        info!(caller = %caller.username, name = %category.name, "Category updated");

        Ok(category)
    }

    /// Deletes a category. Admin only.
    ///
    /// Blocked while lessons sit directly in the category or while child
    /// categories reference it.
    pub fn delete_category(&self, caller: &CallerContext, id: Uuid) -> AppResult<()> {
        if !caller.is_admin() {
            return Err(AppError::authorization("Only admins can manage categories"));
        }

        if self.lessons.any_in_category(id) {
            return Err(AppError::guard(
                "Cannot delete this category because lessons are assigned to it",
            ));
        }
        if self.categories.has_children(id) {
            return Err(AppError::guard(
                "Cannot delete this category because it has subcategories",
            ));
        }

        let removed = self
            .categories
            .remove(id)
            .ok_or_else(|| AppError::not_found("Category not found"))?;

        info!(caller = %caller.username, name = %removed.name, "Category deleted");

        Ok(())
    }

    /// Looks up a category by ID. Absence is not an error.
    pub fn get_category_by_id(&self, id: Uuid) -> Option<Category> {
        self.categories.find_by_id(id)
    }

    /// All categories, ordered by name.
    pub fn all_categories(&self) -> Vec<Category> {
        self.categories.all()
    }

    /// Root categories (no parent).
    pub fn root_categories(&self) -> Vec<Category> {
        self.categories.roots()
    }

    /// Direct children of a category (one level).
    pub fn subcategories(&self, parent_id: Uuid) -> Vec<Category> {
        self.categories.children(parent_id)
    }

    /// Human-readable path from the topmost ancestor down to the category.
    pub fn category_path(&self, id: Uuid) -> AppResult<String> {
        tree::path(&self.categories, id)
    }

    /// The rendered category forest for the given selection.
    pub fn tree(&self, selected: Option<Uuid>) -> CategoryTree {
        tree::build(&self.categories, selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use learnhub_core::error::ErrorKind;
    use learnhub_entity::lesson::Lesson;
    use learnhub_entity::user::UserRole;

    fn admin() -> CallerContext {
        CallerContext::new(Uuid::new_v4(), "academy_admin", UserRole::Admin)
    }

    fn make_service() -> CategoryService {
        CategoryService::new(Arc::new(CategoryStore::new()), Arc::new(LessonStore::new()))
    }

    fn create(service: &CategoryService, name: &str, parent_id: Option<Uuid>) -> Category {
        service
            .add_category(
                &admin(),
                CreateCategoryRequest {
                    name: name.into(),
                    description: String::new(),
                    parent_id,
                },
            )
            .unwrap()
    }

    #[test]
    fn test_non_admin_cannot_manage_categories() {
        let service = make_service();
        let caller = CallerContext::new(Uuid::new_v4(), "teacher1", UserRole::Teacher);
        let err = service
            .add_category(
                &caller,
                CreateCategoryRequest {
                    name: "Web".into(),
                    description: String::new(),
                    parent_id: None,
                },
            )
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }

    #[test]
    fn test_explicit_null_parent_promotes_to_root() {
        let service = make_service();
        let web = create(&service, "Web", None);
        let frontend = create(&service, "Frontend", Some(web.id));

        let updated = service
            .update_category(
                &admin(),
                frontend.id,
                UpdateCategoryRequest {
                    parent_id: Some(None),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(updated.is_root());
        assert_eq!(service.root_categories().len(), 2);
    }

    #[test]
    fn test_reparent_under_descendant_is_rejected() {
        let service = make_service();
        let web = create(&service, "Web", None);
        let frontend = create(&service, "Frontend", Some(web.id));

        let err = service
            .update_category(
                &admin(),
                web.id,
                UpdateCategoryRequest {
                    parent_id: Some(Some(frontend.id)),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_delete_is_blocked_by_lessons_and_children() {
        let lessons = Arc::new(LessonStore::new());
        let service = CategoryService::new(Arc::new(CategoryStore::new()), lessons.clone());
        let web = create(&service, "Web", None);
        let frontend = create(&service, "Frontend", Some(web.id));

        // Child category blocks the parent.
        let err = service.delete_category(&admin(), web.id).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Guard);

        // A lesson blocks the leaf.
        lessons.insert(Lesson {
            id: Uuid::new_v4(),
            title: "Intro".into(),
            description: String::new(),
            video_url: "https://example.com/v".into(),
            homework_file_url: None,
            category_id: frontend.id,
            created_at: Utc::now(),
            teacher_id: None,
            due_date: None,
        });
        let err = service.delete_category(&admin(), frontend.id).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Guard);

        // Unblocked once the lesson is gone.
        lessons.remove(lessons.all()[0].id);
        service.delete_category(&admin(), frontend.id).unwrap();
        service.delete_category(&admin(), web.id).unwrap();
        assert!(service.all_categories().is_empty());
    }
}
