//! Homework submission store implementation.

use dashmap::DashMap;
use uuid::Uuid;

use learnhub_entity::submission::HomeworkSubmission;

/// Arena holding homework submissions, indexed by id.
///
/// Submissions are never removed; the store deliberately has no delete
/// operation.
#[derive(Debug, Default)]
pub struct SubmissionStore {
    arena: DashMap<Uuid, HomeworkSubmission>,
}

impl SubmissionStore {
    /// Create an empty submission store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fully-formed submission record.
    pub fn insert(&self, submission: HomeworkSubmission) {
        self.arena.insert(submission.id, submission);
    }

    /// Find a submission by ID.
    pub fn find_by_id(&self, id: Uuid) -> Option<HomeworkSubmission> {
        self.arena.get(&id).map(|s| s.clone())
    }

    /// Replace an existing record with an updated copy.
    pub fn replace(&self, submission: HomeworkSubmission) {
        self.arena.insert(submission.id, submission);
    }

    /// Submissions by the given student, ordered by submission time.
    pub fn by_user(&self, user_id: Uuid) -> Vec<HomeworkSubmission> {
        let mut submissions: Vec<HomeworkSubmission> = self
            .arena
            .iter()
            .filter(|s| s.user_id == user_id)
            .map(|s| s.clone())
            .collect();
        submissions.sort_by(|a, b| a.submitted_at.cmp(&b.submitted_at));
        submissions
    }

    /// Submissions for the given lesson, ordered by submission time.
    pub fn by_lesson(&self, lesson_id: Uuid) -> Vec<HomeworkSubmission> {
        let mut submissions: Vec<HomeworkSubmission> = self
            .arena
            .iter()
            .filter(|s| s.lesson_id == lesson_id)
            .map(|s| s.clone())
            .collect();
        submissions.sort_by(|a, b| a.submitted_at.cmp(&b.submitted_at));
        submissions
    }

    /// Whether any submission references the given lesson.
    pub fn any_for_lesson(&self, lesson_id: Uuid) -> bool {
        self.arena.iter().any(|s| s.lesson_id == lesson_id)
    }

    /// Number of submissions.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}
