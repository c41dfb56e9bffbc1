//! Integration tests for the category tree.

use super::helpers::TestApp;

use learnhub_core::error::ErrorKind;
use learnhub_service::category::{CreateCategoryRequest, UpdateCategoryRequest};

fn create(name: &str, parent_id: Option<uuid::Uuid>) -> CreateCategoryRequest {
    CreateCategoryRequest {
        name: name.to_string(),
        description: String::new(),
        parent_id,
    }
}

#[test]
fn test_path_joins_ancestor_names() {
    let app = TestApp::new();
    let frontend = app.category("Frontend");

    let path = app.state.categories.category_path(frontend.id).unwrap();
    assert_eq!(path, "Web Development > Frontend");
}

#[test]
fn test_add_requires_admin() {
    let app = TestApp::new();

    let err = app
        .state
        .categories
        .add_category(&app.caller("teacher1"), create("Backend", None))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);
}

#[test]
fn test_add_rejects_missing_parent() {
    let app = TestApp::new();

    let err = app
        .state
        .categories
        .add_category(&app.admin(), create("Orphan", Some(uuid::Uuid::new_v4())))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[test]
fn test_promote_to_root() {
    let app = TestApp::new();
    let frontend = app.category("Frontend");

    let updated = app
        .state
        .categories
        .update_category(
            &app.admin(),
            frontend.id,
            UpdateCategoryRequest {
                parent_id: Some(None),
                ..UpdateCategoryRequest::default()
            },
        )
        .unwrap();
    assert!(updated.parent_id.is_none());
    assert_eq!(
        app.state.categories.category_path(frontend.id).unwrap(),
        "Frontend"
    );
}

#[test]
fn test_reparent_under_own_descendant_is_rejected() {
    let app = TestApp::new();
    let web = app.category("Web Development");
    let frontend = app.category("Frontend");

    let err = app
        .state
        .categories
        .update_category(
            &app.admin(),
            web.id,
            UpdateCategoryRequest {
                parent_id: Some(Some(frontend.id)),
                ..UpdateCategoryRequest::default()
            },
        )
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[test]
fn test_delete_blocked_by_children_and_lessons() {
    let app = TestApp::new();
    let web = app.category("Web Development");

    // Seeded "Web Development" has both a child category and a lesson.
    let err = app
        .state
        .categories
        .delete_category(&app.admin(), web.id)
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Guard);
}

#[test]
fn test_delete_empty_category() {
    let app = TestApp::new();
    let mobile = app.category("Mobile Development");

    app.state
        .categories
        .delete_category(&app.admin(), mobile.id)
        .unwrap();
    assert!(app.state.categories.get_category_by_id(mobile.id).is_none());
}

#[test]
fn test_dangling_parent_is_treated_as_root() {
    let app = TestApp::new();
    let admin = app.admin();
    let parent = app
        .state
        .categories
        .add_category(&admin, create("Doomed", None))
        .unwrap();
    let child = app
        .state
        .categories
        .add_category(&admin, create("Survivor", Some(parent.id)))
        .unwrap();

    // Remove the parent behind the service's back to orphan the child.
    app.state.stores.categories.remove(parent.id);

    assert_eq!(
        app.state.categories.category_path(child.id).unwrap(),
        "Survivor"
    );
}

#[test]
fn test_tree_expands_along_selection() {
    let app = TestApp::new();
    let frontend = app.category("Frontend");

    let tree = app.state.categories.tree(Some(frontend.id));
    assert_eq!(tree.total_categories, 3);

    let web = tree
        .roots
        .iter()
        .find(|n| n.name == "Web Development")
        .unwrap();
    assert!(web.expanded);
    assert_eq!(web.children.len(), 1);
    assert!(web.children[0].selected);

    let mobile = tree
        .roots
        .iter()
        .find(|n| n.name == "Mobile Development")
        .unwrap();
    assert!(!mobile.expanded);
}
