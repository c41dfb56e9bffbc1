//! Lesson CRUD with ownership gating, deletion guards, and the
//! transitive category filter.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;
use learnhub_entity::lesson::{CreateLesson, Lesson, UpdateLesson};
use learnhub_store::{CategoryStore, LessonStore, SubmissionStore};

use crate::category::tree;
use crate::context::CallerContext;

/// Manages the lesson catalog.
#[derive(Debug)]
pub struct LessonService {
    /// Lesson catalog.
    lessons: Arc<LessonStore>,
    /// Category forest, for membership checks and subtree filtering.
    categories: Arc<CategoryStore>,
    /// Submissions, consulted for the deletion guard.
    submissions: Arc<SubmissionStore>,
}

/// Request to create a new lesson.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Validate)]
pub struct CreateLessonRequest {
    /// Lesson title.
    #[validate(length(min = 1, message = "Lesson title cannot be empty"))]
    pub title: String,
    /// Lesson description.
    pub description: String,
    /// Video URL.
    #[validate(length(min = 1, message = "Video URL cannot be empty"))]
    pub video_url: String,
    /// Attached homework file, if any.
    pub homework_file_url: Option<String>,
    /// The category the lesson belongs to.
    pub category_id: Uuid,
    /// Owning teacher override (admins only; teachers always own their
    /// own lessons).
    pub teacher_id: Option<Uuid>,
    /// Homework due date, if set.
    pub due_date: Option<DateTime<Utc>>,
}

impl LessonService {
    /// Creates a new lesson service.
    pub fn new(
        lessons: Arc<LessonStore>,
        categories: Arc<CategoryStore>,
        submissions: Arc<SubmissionStore>,
    ) -> Self {
        Self {
            lessons,
            categories,
            submissions,
        }
    }

    /// Creates a new lesson. Teachers and admins only.
    ///
    /// A teacher always becomes the owner of the lesson they create; an
    /// admin may record any teacher as the owner, or none.
    pub fn add_lesson(&self, caller: &CallerContext, req: CreateLessonRequest) -> AppResult<Lesson> {
        if !caller.can_manage_lessons() {
            return Err(AppError::authorization(
                "Only teachers and admins can create lessons",
            ));
        }

        req.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        if self.categories.find_by_id(req.category_id).is_none() {
            return Err(AppError::not_found("Category not found"));
        }

        let teacher_id = if caller.is_teacher() {
            Some(caller.user_id)
        } else {
            req.teacher_id
        };

        let lesson = Lesson::from(CreateLesson {
            title: req.title,
            description: req.description,
            video_url: req.video_url,
            homework_file_url: req.homework_file_url,
            category_id: req.category_id,
            teacher_id,
            due_date: req.due_date,
        });

        info!(caller = %caller.username, title = %lesson.title, "Lesson created");

        self.lessons.insert(lesson.clone());
        Ok(lesson)
    }

    /// Updates a lesson. Allowed for its owning teacher and for admins.
    pub fn update_lesson(
        &self,
        caller: &CallerContext,
        id: Uuid,
        updates: UpdateLesson,
    ) -> AppResult<Lesson> {
        let mut lesson = self
            .lessons
            .find_by_id(id)
            .ok_or_else(|| AppError::not_found("Lesson not found"))?;

        self.require_ownership(caller, &lesson)?;

        if let Some(category_id) = updates.category_id
            && self.categories.find_by_id(category_id).is_none()
        {
            return Err(AppError::not_found("Category not found"));
        }

        lesson.apply(updates);
        self.lessons.replace(lesson.clone());

        info!(caller = %caller.username, title = %lesson.title, "Lesson updated");

        Ok(lesson)
    }

    /// Deletes a lesson. Allowed for its owning teacher and for admins.
    ///
    /// Blocked while any submission references the lesson: submissions
    /// outlive their lesson's deletability.
    pub fn delete_lesson(&self, caller: &CallerContext, id: Uuid) -> AppResult<()> {
        let lesson = self
            .lessons
            .find_by_id(id)
            .ok_or_else(|| AppError::not_found("Lesson not found"))?;

        self.require_ownership(caller, &lesson)?;

        if self.submissions.any_for_lesson(id) {
            return Err(AppError::guard(
                "Cannot delete this lesson because student submissions reference it",
            ));
        }

        self.lessons.remove(id);

        info!(caller = %caller.username, title = %lesson.title, "Lesson deleted");

        Ok(())
    }

    /// Looks up a lesson by ID. Absence is not an error.
    pub fn get_lesson_by_id(&self, id: Uuid) -> Option<Lesson> {
        self.lessons.find_by_id(id)
    }

    /// All lessons in the catalog.
    pub fn all_lessons(&self) -> Vec<Lesson> {
        self.lessons.all()
    }

    /// Lessons directly in the given category.
    pub fn lessons_by_category(&self, category_id: Uuid) -> Vec<Lesson> {
        self.lessons.by_category(category_id)
    }

    /// Lessons owned by the given teacher.
    pub fn lessons_by_teacher(&self, teacher_id: Uuid) -> Vec<Lesson> {
        self.lessons.by_teacher(teacher_id)
    }

    /// Lessons in the given category or any of its descendants.
    ///
    /// Category membership is a partition (each lesson has exactly one
    /// category), so the union over the subtree id set needs no
    /// deduplication.
    pub fn lessons_in_subtree(&self, category_id: Uuid) -> Vec<Lesson> {
        let ids = tree::subtree_ids(&self.categories, category_id);
        let mut lessons: Vec<Lesson> = self
            .lessons
            .all()
            .into_iter()
            .filter(|l| ids.contains(&l.category_id))
            .collect();
        lessons.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.title.cmp(&b.title)));
        lessons
    }

    /// The catalog filtered by an optional selected category and an
    /// optional search term over title and description.
    pub fn filtered(&self, selected: Option<Uuid>, search: &str) -> Vec<Lesson> {
        let lessons = match selected {
            Some(category_id) => self.lessons_in_subtree(category_id),
            None => self.lessons.all(),
        };

        let term = search.trim().to_lowercase();
        if term.is_empty() {
            return lessons;
        }

        lessons
            .into_iter()
            .filter(|l| {
                l.title.to_lowercase().contains(&term)
                    || l.description.to_lowercase().contains(&term)
            })
            .collect()
    }

    fn require_ownership(&self, caller: &CallerContext, lesson: &Lesson) -> AppResult<()> {
        if caller.is_admin() {
            return Ok(());
        }
        if caller.is_teacher() && lesson.teacher_id == Some(caller.user_id) {
            return Ok(());
        }
        Err(AppError::authorization(
            "You do not have permission to modify this lesson",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnhub_core::error::ErrorKind;
    use learnhub_entity::category::Category;
    use learnhub_entity::submission::{HomeworkSubmission, SubmissionStatus};
    use learnhub_entity::user::UserRole;

    struct Fixture {
        service: LessonService,
        submissions: Arc<SubmissionStore>,
        web_id: Uuid,
        frontend_id: Uuid,
    }

    fn make_fixture() -> Fixture {
        let categories = Arc::new(CategoryStore::new());
        let lessons = Arc::new(LessonStore::new());
        let submissions = Arc::new(SubmissionStore::new());

        let web = Category {
            id: Uuid::new_v4(),
            name: "Web".into(),
            description: String::new(),
            parent_id: None,
            created_at: Utc::now(),
        };
        let frontend = Category {
            id: Uuid::new_v4(),
            name: "Frontend".into(),
            description: String::new(),
            parent_id: Some(web.id),
            created_at: Utc::now(),
        };
        let web_id = web.id;
        let frontend_id = frontend.id;
        categories.insert(web);
        categories.insert(frontend);

        Fixture {
            service: LessonService::new(lessons, categories, submissions.clone()),
            submissions,
            web_id,
            frontend_id,
        }
    }

    fn teacher() -> CallerContext {
        CallerContext::new(Uuid::new_v4(), "teacher1", UserRole::Teacher)
    }

    fn request(title: &str, category_id: Uuid) -> CreateLessonRequest {
        CreateLessonRequest {
            title: title.into(),
            description: String::new(),
            video_url: "https://example.com/v".into(),
            homework_file_url: None,
            category_id,
            teacher_id: None,
            due_date: None,
        }
    }

    #[test]
    fn test_student_cannot_create_lessons() {
        let fx = make_fixture();
        let caller = CallerContext::new(Uuid::new_v4(), "student1", UserRole::Student);
        let err = fx
            .service
            .add_lesson(&caller, request("Intro", fx.web_id))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }

    #[test]
    fn test_teacher_owns_created_lessons() {
        let fx = make_fixture();
        let caller = teacher();
        let lesson = fx
            .service
            .add_lesson(&caller, request("Intro", fx.web_id))
            .unwrap();
        assert_eq!(lesson.teacher_id, Some(caller.user_id));
    }

    #[test]
    fn test_selecting_parent_includes_descendant_lessons() {
        let fx = make_fixture();
        let caller = teacher();
        let l1 = fx
            .service
            .add_lesson(&caller, request("L1", fx.web_id))
            .unwrap();
        let l2 = fx
            .service
            .add_lesson(&caller, request("L2", fx.frontend_id))
            .unwrap();

        let in_web: Vec<Uuid> = fx
            .service
            .lessons_in_subtree(fx.web_id)
            .iter()
            .map(|l| l.id)
            .collect();
        assert_eq!(in_web.len(), 2);
        assert!(in_web.contains(&l1.id) && in_web.contains(&l2.id));

        let in_frontend: Vec<Uuid> = fx
            .service
            .lessons_in_subtree(fx.frontend_id)
            .iter()
            .map(|l| l.id)
            .collect();
        assert_eq!(in_frontend, vec![l2.id]);
    }

    #[test]
    fn test_search_filters_title_and_description() {
        let fx = make_fixture();
        let caller = teacher();
        fx.service
            .add_lesson(&caller, request("Introduction to React", fx.web_id))
            .unwrap();
        fx.service
            .add_lesson(&caller, request("Rust Basics", fx.web_id))
            .unwrap();

        let hits = fx.service.filtered(None, "react");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Introduction to React");
    }

    #[test]
    fn test_delete_is_blocked_by_submissions() {
        let fx = make_fixture();
        let caller = teacher();
        let lesson = fx
            .service
            .add_lesson(&caller, request("Intro", fx.web_id))
            .unwrap();

        fx.submissions.insert(HomeworkSubmission {
            id: Uuid::new_v4(),
            lesson_id: lesson.id,
            user_id: Uuid::new_v4(),
            file_url: "mem://hw".into(),
            submitted_at: Utc::now(),
            status: SubmissionStatus::Pending,
            grade: None,
            feedback: None,
        });

        let err = fx.service.delete_lesson(&caller, lesson.id).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Guard);
        assert!(fx.service.get_lesson_by_id(lesson.id).is_some());
    }

    #[test]
    fn test_only_owner_or_admin_deletes() {
        let fx = make_fixture();
        let owner = teacher();
        let lesson = fx
            .service
            .add_lesson(&owner, request("Intro", fx.web_id))
            .unwrap();

        let other = teacher();
        let err = fx.service.delete_lesson(&other, lesson.id).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);

        let admin = CallerContext::new(Uuid::new_v4(), "academy_admin", UserRole::Admin);
        fx.service.delete_lesson(&admin, lesson.id).unwrap();
        assert!(fx.service.get_lesson_by_id(lesson.id).is_none());
    }
}
