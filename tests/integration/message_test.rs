//! Integration tests for direct messaging.

use super::helpers::TestApp;

use learnhub_core::error::ErrorKind;

#[test]
fn test_conversation_is_bidirectional_and_ordered() {
    let app = TestApp::new();
    let student = app.caller("student1");
    let teacher = app.caller("teacher1");

    app.state
        .messages
        .send(&student, teacher.user_id, "Question about lesson 1")
        .unwrap();
    app.state
        .messages
        .send(&teacher, student.user_id, "Sure, ask away")
        .unwrap();
    app.state
        .messages
        .send(&student, teacher.user_id, "What is a hook?")
        .unwrap();

    let conversation = app
        .state
        .messages
        .conversation(student.user_id, teacher.user_id);
    assert_eq!(conversation.len(), 3);
    assert_eq!(conversation[0].content, "Question about lesson 1");
    assert_eq!(conversation[1].content, "Sure, ask away");
    assert_eq!(conversation[2].content, "What is a hook?");
    assert!(conversation.windows(2).all(|w| w[0].sent_at <= w[1].sent_at));
}

#[test]
fn test_conversation_excludes_other_pairs() {
    let app = TestApp::new();
    let student = app.caller("student1");
    let teacher = app.caller("teacher1");
    let admin = app.admin();

    app.state
        .messages
        .send(&student, teacher.user_id, "To my teacher")
        .unwrap();
    app.state
        .messages
        .send(&student, admin.user_id, "To the admin")
        .unwrap();

    let conversation = app
        .state
        .messages
        .conversation(student.user_id, teacher.user_id);
    assert_eq!(conversation.len(), 1);
    assert_eq!(conversation[0].content, "To my teacher");
}

#[test]
fn test_blank_message_is_rejected() {
    let app = TestApp::new();
    let student = app.caller("student1");
    let teacher = app.caller("teacher1");

    let err = app
        .state
        .messages
        .send(&student, teacher.user_id, "   \n  ")
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(
        app.state
            .messages
            .messages_by_user(student.user_id)
            .is_empty()
    );
}

#[test]
fn test_messages_start_unread() {
    let app = TestApp::new();
    let student = app.caller("student1");
    let teacher = app.caller("teacher1");

    let message = app
        .state
        .messages
        .send(&student, teacher.user_id, "Hello")
        .unwrap();
    assert!(!message.is_read);
}
