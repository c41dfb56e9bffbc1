//! Homework submission and grading workflow.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;
use learnhub_core::traits::BlobStore;
use learnhub_entity::submission::{HomeworkSubmission, SubmissionStatus};
use learnhub_store::{LessonStore, SubmissionStore};

use crate::context::CallerContext;

/// Manages homework submissions and their grading.
#[derive(Debug)]
pub struct SubmissionService {
    /// Submission arena.
    submissions: Arc<SubmissionStore>,
    /// Lesson catalog, for existence checks.
    lessons: Arc<LessonStore>,
    /// Upload collaborator producing file locators.
    blobs: Arc<dyn BlobStore>,
}

/// Request to grade a submission.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Validate)]
pub struct GradeRequest {
    /// Grade in [0, 100].
    #[validate(range(min = 0, max = 100, message = "Grade must be between 0 and 100"))]
    pub grade: u8,
    /// Optional feedback text.
    pub feedback: Option<String>,
}

impl SubmissionService {
    /// Creates a new submission service.
    pub fn new(
        submissions: Arc<SubmissionStore>,
        lessons: Arc<LessonStore>,
        blobs: Arc<dyn BlobStore>,
    ) -> Self {
        Self {
            submissions,
            lessons,
            blobs,
        }
    }

    /// Submits homework for a lesson.
    ///
    /// The file bytes pass through the blob collaborator, which completes
    /// synchronously and yields the locator stored on the record. The new
    /// submission starts `Pending` with no grade or feedback.
    pub fn submit_homework(
        &self,
        caller: &CallerContext,
        lesson_id: Uuid,
        file: Vec<u8>,
    ) -> AppResult<HomeworkSubmission> {
        if self.lessons.find_by_id(lesson_id).is_none() {
            return Err(AppError::not_found("Lesson not found"));
        }

        let file_url = self.blobs.store(file)?;

        let submission = HomeworkSubmission {
            id: Uuid::new_v4(),
            lesson_id,
            user_id: caller.user_id,
            file_url,
            submitted_at: Utc::now(),
            status: SubmissionStatus::Pending,
            grade: None,
            feedback: None,
        };

        info!(
            caller = %caller.username,
            submission_id = %submission.id,
            "Homework submitted"
        );

        self.submissions.insert(submission.clone());
        Ok(submission)
    }

    /// Records a grade for a submission. Teachers and admins only.
    ///
    /// Moves the submission to `Graded`. Re-grading an already-graded
    /// submission is permitted and overwrites grade and feedback while
    /// remaining `Graded`. An out-of-range grade is rejected with no
    /// state change.
    pub fn grade(
        &self,
        caller: &CallerContext,
        submission_id: Uuid,
        req: GradeRequest,
    ) -> AppResult<HomeworkSubmission> {
        if !caller.can_manage_lessons() {
            return Err(AppError::authorization(
                "Only teachers and admins can grade homework",
            ));
        }

        req.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        let mut submission = self
            .submissions
            .find_by_id(submission_id)
            .ok_or_else(|| AppError::not_found("Submission not found"))?;

        submission.grade = Some(req.grade);
        submission.feedback = req.feedback;
        submission.status = SubmissionStatus::Graded;

        self.submissions.replace(submission.clone());

        info!(
            caller = %caller.username,
            submission_id = %submission.id,
            grade = req.grade,
            "Homework graded"
        );

        Ok(submission)
    }

    /// Looks up a submission by ID. Absence is not an error.
    pub fn get_submission_by_id(&self, id: Uuid) -> Option<HomeworkSubmission> {
        self.submissions.find_by_id(id)
    }

    /// Submissions by the given student.
    pub fn submissions_by_user(&self, user_id: Uuid) -> Vec<HomeworkSubmission> {
        self.submissions.by_user(user_id)
    }

    /// Submissions for the given lesson.
    pub fn submissions_by_lesson(&self, lesson_id: Uuid) -> Vec<HomeworkSubmission> {
        self.submissions.by_lesson(lesson_id)
    }
}
