//! Integration tests for lesson management and browsing.

use super::helpers::TestApp;

use learnhub_core::error::ErrorKind;
use learnhub_entity::lesson::UpdateLesson;
use learnhub_entity::user::UserRole;
use learnhub_service::identity::CreateUserRequest;
use learnhub_service::lesson::CreateLessonRequest;

fn new_lesson(title: &str, category_id: uuid::Uuid) -> CreateLessonRequest {
    CreateLessonRequest {
        title: title.to_string(),
        description: String::new(),
        video_url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
        homework_file_url: None,
        category_id,
        teacher_id: None,
        due_date: None,
    }
}

#[test]
fn test_teacher_owns_their_lessons() {
    let app = TestApp::new();
    let teacher = app.caller("teacher1");
    let mobile = app.category("Mobile Development");

    // An ownership override by a non-admin is ignored.
    let mut req = new_lesson("Intro to Flutter", mobile.id);
    req.teacher_id = Some(uuid::Uuid::new_v4());

    let lesson = app.state.lessons.add_lesson(&teacher, req).unwrap();
    assert_eq!(lesson.teacher_id, Some(teacher.user_id));
}

#[test]
fn test_admin_can_assign_a_teacher() {
    let app = TestApp::new();
    let teacher = app.user("teacher1");
    let mobile = app.category("Mobile Development");

    let mut req = new_lesson("Kotlin Basics", mobile.id);
    req.teacher_id = Some(teacher.id);

    let lesson = app.state.lessons.add_lesson(&app.admin(), req).unwrap();
    assert_eq!(lesson.teacher_id, Some(teacher.id));
}

#[test]
fn test_student_cannot_add_lessons() {
    let app = TestApp::new();
    let mobile = app.category("Mobile Development");

    let err = app
        .state
        .lessons
        .add_lesson(&app.caller("student1"), new_lesson("Nope", mobile.id))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);
}

#[test]
fn test_add_rejects_unknown_category() {
    let app = TestApp::new();

    let err = app
        .state
        .lessons
        .add_lesson(
            &app.caller("teacher1"),
            new_lesson("Lost", uuid::Uuid::new_v4()),
        )
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[test]
fn test_update_requires_ownership() {
    let app = TestApp::new();

    let other = app
        .state
        .identity
        .add_user(
            &app.admin(),
            CreateUserRequest {
                username: "teacher2".to_string(),
                password: "secret".to_string(),
                role: UserRole::Teacher,
                full_name: None,
                subject_area: None,
                student_number: None,
                email: None,
                phone: None,
            },
        )
        .unwrap();

    let lesson_id = app.lesson_id("Introduction to React");
    let err = app
        .state
        .lessons
        .update_lesson(
            &app.caller(&other.username),
            lesson_id,
            UpdateLesson::default(),
        )
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);
}

#[test]
fn test_delete_blocked_by_submissions() {
    let app = TestApp::new();
    let lesson_id = app.lesson_id("Introduction to React");

    app.state
        .submissions
        .submit_homework(&app.caller("student1"), lesson_id, b"my answer".to_vec())
        .unwrap();

    let err = app
        .state
        .lessons
        .delete_lesson(&app.caller("teacher1"), lesson_id)
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Guard);
}

#[test]
fn test_delete_without_submissions() {
    let app = TestApp::new();
    let lesson_id = app.lesson_id("Advanced React Concepts");

    app.state
        .lessons
        .delete_lesson(&app.caller("teacher1"), lesson_id)
        .unwrap();
    assert!(app.state.lessons.get_lesson_by_id(lesson_id).is_none());
}

#[test]
fn test_subtree_aggregation_includes_child_categories() {
    let app = TestApp::new();
    let web = app.category("Web Development");

    // One lesson sits directly under "Web Development", the other under
    // its "Frontend" child.
    let lessons = app.state.lessons.lessons_in_subtree(web.id);
    assert_eq!(lessons.len(), 2);
}

#[test]
fn test_filtered_search_matches_title_and_description() {
    let app = TestApp::new();

    let by_title = app.state.lessons.filtered(None, "ADVANCED");
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].title, "Advanced React Concepts");

    let by_description = app.state.lessons.filtered(None, "basics of react");
    assert_eq!(by_description.len(), 1);

    let none = app.state.lessons.filtered(None, "quantum chromodynamics");
    assert!(none.is_empty());
}

#[test]
fn test_filtered_respects_selected_subtree() {
    let app = TestApp::new();
    let frontend = app.category("Frontend");

    let lessons = app.state.lessons.filtered(Some(frontend.id), "");
    assert_eq!(lessons.len(), 1);
    assert_eq!(lessons[0].title, "Advanced React Concepts");
}
