//! Integration tests for authentication and user administration.

use super::helpers::TestApp;

use learnhub_core::error::ErrorKind;
use learnhub_entity::user::{UpdateUser, UserRole};
use learnhub_service::identity::CreateUserRequest;

fn new_user(username: &str, role: UserRole) -> CreateUserRequest {
    CreateUserRequest {
        username: username.to_string(),
        password: "secret".to_string(),
        role,
        full_name: None,
        subject_area: None,
        student_number: None,
        email: None,
        phone: None,
    }
}

#[test]
fn test_login_success_sets_session() {
    let app = TestApp::new();

    assert!(app.state.identity.login("teacher1", "teacher123").unwrap());
    let current = app.state.identity.session().current().unwrap();
    assert_eq!(current.username, "teacher1");
    assert!(app.state.identity.session().is_teacher());
}

#[test]
fn test_login_username_is_case_insensitive() {
    let app = TestApp::new();
    assert!(app.state.identity.login("TEACHER1", "teacher123").unwrap());
}

#[test]
fn test_login_wrong_password_leaves_session_empty() {
    let app = TestApp::new();

    assert!(!app.state.identity.login("teacher1", "nope").unwrap());
    assert!(app.state.identity.session().current().is_none());
}

#[test]
fn test_login_nonexistent_user() {
    let app = TestApp::new();
    assert!(!app.state.identity.login("nobody", "whatever").unwrap());
}

#[test]
fn test_logout_clears_persisted_session() {
    let app = TestApp::new();

    app.state.identity.login("student1", "student123").unwrap();
    app.state.identity.logout().unwrap();

    assert!(app.state.identity.session().current().is_none());
    assert!(app.state.identity.restore_session().unwrap().is_none());
}

#[test]
fn test_session_survives_restore() {
    let app = TestApp::new();

    app.state.identity.login("student1", "student123").unwrap();
    let restored = app.state.identity.restore_session().unwrap().unwrap();
    assert_eq!(restored.username, "student1");
}

#[test]
fn test_add_user_requires_admin() {
    let app = TestApp::new();

    let err = app
        .state
        .identity
        .add_user(&app.caller("teacher1"), new_user("newbie", UserRole::Student))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);
}

#[test]
fn test_add_user_rejects_duplicate_username_ignoring_case() {
    let app = TestApp::new();

    let err = app
        .state
        .identity
        .add_user(&app.admin(), new_user("Teacher1", UserRole::Teacher))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
}

#[test]
fn test_new_teacher_starts_with_zero_rating() {
    let app = TestApp::new();

    let mut req = new_user("teacher2", UserRole::Teacher);
    req.subject_area = Some("Math".to_string());
    // Student-only fields are stripped for teachers.
    req.student_number = Some("ST999".to_string());

    let user = app.state.identity.add_user(&app.admin(), req).unwrap();
    assert_eq!(user.rating, Some(0.0));
    assert_eq!(user.subject_area.as_deref(), Some("Math"));
    assert!(user.student_number.is_none());
}

#[test]
fn test_update_own_profile_without_admin() {
    let app = TestApp::new();
    let student = app.user("student1");

    let updated = app
        .state
        .identity
        .update_user(
            &app.caller("student1"),
            student.id,
            UpdateUser {
                phone: Some("+7-700-000-0000".to_string()),
                ..UpdateUser::default()
            },
        )
        .unwrap();
    assert_eq!(updated.phone.as_deref(), Some("+7-700-000-0000"));
}

#[test]
fn test_update_other_user_requires_admin() {
    let app = TestApp::new();
    let teacher = app.user("teacher1");

    let err = app
        .state
        .identity
        .update_user(&app.caller("student1"), teacher.id, UpdateUser::default())
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);
}

#[test]
fn test_primary_admin_cannot_be_deleted() {
    let app = TestApp::new();
    let admin = app.user("academy_admin");

    let err = app
        .state
        .identity
        .delete_user(&app.admin(), admin.id)
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Guard);
}

#[test]
fn test_delete_student() {
    let app = TestApp::new();
    let student = app.user("student1");

    app.state
        .identity
        .delete_user(&app.admin(), student.id)
        .unwrap();
    assert!(app.state.identity.get_user_by_id(student.id).is_none());
}
