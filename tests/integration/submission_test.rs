//! Integration tests for homework submission and grading.

use super::helpers::TestApp;

use learnhub_core::error::ErrorKind;
use learnhub_entity::submission::SubmissionStatus;
use learnhub_service::submission::GradeRequest;

#[test]
fn test_submission_starts_pending_with_stored_file() {
    let app = TestApp::new();
    let lesson_id = app.lesson_id("Introduction to React");

    let submission = app
        .state
        .submissions
        .submit_homework(&app.caller("student1"), lesson_id, b"my essay".to_vec())
        .unwrap();

    assert_eq!(submission.status, SubmissionStatus::Pending);
    assert!(submission.grade.is_none());
    assert!(submission.file_url.starts_with("mem://"));
}

#[test]
fn test_submit_to_unknown_lesson() {
    let app = TestApp::new();

    let err = app
        .state
        .submissions
        .submit_homework(&app.caller("student1"), uuid::Uuid::new_v4(), Vec::new())
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[test]
fn test_grading_requires_teacher_or_admin() {
    let app = TestApp::new();
    let lesson_id = app.lesson_id("Introduction to React");
    let submission = app
        .state
        .submissions
        .submit_homework(&app.caller("student1"), lesson_id, Vec::new())
        .unwrap();

    let err = app
        .state
        .submissions
        .grade(
            &app.caller("student1"),
            submission.id,
            GradeRequest {
                grade: 100,
                feedback: None,
            },
        )
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);
}

#[test]
fn test_out_of_range_grade_leaves_submission_pending() {
    let app = TestApp::new();
    let lesson_id = app.lesson_id("Introduction to React");
    let submission = app
        .state
        .submissions
        .submit_homework(&app.caller("student1"), lesson_id, Vec::new())
        .unwrap();

    let err = app
        .state
        .submissions
        .grade(
            &app.caller("teacher1"),
            submission.id,
            GradeRequest {
                grade: 150,
                feedback: None,
            },
        )
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    let unchanged = app
        .state
        .submissions
        .get_submission_by_id(submission.id)
        .unwrap();
    assert_eq!(unchanged.status, SubmissionStatus::Pending);
    assert!(unchanged.grade.is_none());
}

#[test]
fn test_grade_then_regrade() {
    let app = TestApp::new();
    let teacher = app.caller("teacher1");
    let lesson_id = app.lesson_id("Introduction to React");
    let submission = app
        .state
        .submissions
        .submit_homework(&app.caller("student1"), lesson_id, Vec::new())
        .unwrap();

    let graded = app
        .state
        .submissions
        .grade(
            &teacher,
            submission.id,
            GradeRequest {
                grade: 85,
                feedback: Some("Good work".to_string()),
            },
        )
        .unwrap();
    assert_eq!(graded.status, SubmissionStatus::Graded);
    assert_eq!(graded.grade, Some(85));

    let regraded = app
        .state
        .submissions
        .grade(
            &teacher,
            submission.id,
            GradeRequest {
                grade: 90,
                feedback: Some("Even better after review".to_string()),
            },
        )
        .unwrap();
    assert_eq!(regraded.status, SubmissionStatus::Graded);
    assert_eq!(regraded.grade, Some(90));
    assert_eq!(regraded.feedback.as_deref(), Some("Even better after review"));
}

#[test]
fn test_submissions_by_user_and_lesson() {
    let app = TestApp::new();
    let student = app.caller("student1");
    let intro = app.lesson_id("Introduction to React");
    let advanced = app.lesson_id("Advanced React Concepts");

    app.state
        .submissions
        .submit_homework(&student, intro, Vec::new())
        .unwrap();
    app.state
        .submissions
        .submit_homework(&student, advanced, Vec::new())
        .unwrap();

    assert_eq!(
        app.state.submissions.submissions_by_user(student.user_id).len(),
        2
    );
    assert_eq!(app.state.submissions.submissions_by_lesson(intro).len(), 1);
}
