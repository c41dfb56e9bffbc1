//! Homework grading for teachers and admins.

use serde::Serialize;
use tabled::Tabled;

use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;
use learnhub_service::submission::GradeRequest;

use crate::prompt;
use crate::render::{self, OutputFormat};
use crate::state::AppState;

/// Submission display row for table output
#[derive(Debug, Serialize, Tabled)]
struct GradingRow {
    /// Student
    student: String,
    /// Status
    status: String,
    /// Grade
    grade: String,
    /// File
    file: String,
    /// Submitted at
    submitted_at: String,
}

/// List submissions for one of the caller's lessons and grade one.
pub fn grade_homework(state: &AppState, format: OutputFormat) -> AppResult<()> {
    let caller = state.caller()?;
    render::heading("Grade homework");

    let lessons = if caller.is_admin() {
        state.lessons.all_lessons()
    } else {
        state.lessons.lessons_by_teacher(caller.user_id)
    };
    if lessons.is_empty() {
        render::warning("No lessons to grade");
        return Ok(());
    }

    let labels: Vec<String> = lessons.iter().map(|l| l.title.clone()).collect();
    let index = prompt::select("Lesson", &labels)?;
    let lesson = &lessons[index];

    let submissions = state.submissions.submissions_by_lesson(lesson.id);
    let rows: Vec<GradingRow> = submissions
        .iter()
        .map(|s| GradingRow {
            student: state.identity.display_name(Some(s.user_id)),
            status: s.status.to_string(),
            grade: s.grade.map(|g| g.to_string()).unwrap_or_default(),
            file: s.file_url.clone(),
            submitted_at: s.submitted_at.format("%Y-%m-%d %H:%M").to_string(),
        })
        .collect();
    render::list(&rows, format);

    if submissions.is_empty() || !prompt::confirm("Grade a submission?")? {
        return Ok(());
    }

    let labels: Vec<String> = submissions
        .iter()
        .map(|s| {
            format!(
                "{} ({})",
                state.identity.display_name(Some(s.user_id)),
                s.status
            )
        })
        .collect();
    let index = prompt::select("Submission", &labels)?;
    let submission = &submissions[index];

    let raw = prompt::text("Grade (0-100)")?;
    let grade: u8 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid grade: '{raw}'")))?;
    let feedback = prompt::optional_text("Feedback")?;

    let graded = state
        .submissions
        .grade(&caller, submission.id, GradeRequest { grade, feedback })?;
    render::success(&format!(
        "Graded {} with {}",
        state.identity.display_name(Some(graded.user_id)),
        grade
    ));
    Ok(())
}
