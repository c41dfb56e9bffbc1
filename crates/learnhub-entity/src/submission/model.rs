//! Homework submission entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::status::SubmissionStatus;

/// A student's homework submission for a lesson.
///
/// Submissions are append-only: they are never deleted, and they block
/// deletion of the lesson they reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeworkSubmission {
    /// Unique submission identifier.
    pub id: Uuid,
    /// The lesson this submission answers.
    pub lesson_id: Uuid,
    /// The submitting student.
    pub user_id: Uuid,
    /// Locator of the uploaded homework file.
    pub file_url: String,
    /// When the homework was submitted.
    pub submitted_at: DateTime<Utc>,
    /// Workflow status.
    pub status: SubmissionStatus,
    /// Recorded grade, 0-100 (present once graded).
    pub grade: Option<u8>,
    /// Teacher feedback text (optional, set while grading).
    pub feedback: Option<String>,
}

impl HomeworkSubmission {
    /// Check whether the submission still awaits a grade.
    pub fn is_pending(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }
}
