//! A student's view of their own homework submissions.

use serde::Serialize;
use tabled::Tabled;

use learnhub_core::result::AppResult;

use crate::render::{self, OutputFormat};
use crate::state::AppState;

/// Submission display row for table output
#[derive(Debug, Serialize, Tabled)]
struct SubmissionRow {
    /// Lesson
    lesson: String,
    /// Status
    status: String,
    /// Grade
    grade: String,
    /// Feedback
    feedback: String,
    /// Submitted at
    submitted_at: String,
}

/// List the caller's submissions with grades and feedback.
pub fn my_submissions(state: &AppState, format: OutputFormat) -> AppResult<()> {
    let caller = state.caller()?;
    render::heading("My homework");

    let rows: Vec<SubmissionRow> = state
        .submissions
        .submissions_by_user(caller.user_id)
        .iter()
        .map(|s| SubmissionRow {
            lesson: state
                .lessons
                .get_lesson_by_id(s.lesson_id)
                .map(|l| l.title)
                .unwrap_or_else(|| "Unknown lesson".to_string()),
            status: s.status.to_string(),
            grade: s.grade.map(|g| g.to_string()).unwrap_or_default(),
            feedback: s.feedback.clone().unwrap_or_default(),
            submitted_at: s.submitted_at.format("%Y-%m-%d %H:%M").to_string(),
        })
        .collect();

    render::list(&rows, format);
    Ok(())
}
