//! Lesson entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A video lesson in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    /// Unique lesson identifier.
    pub id: Uuid,
    /// Lesson title.
    pub title: String,
    /// Lesson description.
    pub description: String,
    /// Video URL (YouTube URLs get embedded, others open externally).
    pub video_url: String,
    /// Attached homework assignment file, if any.
    pub homework_file_url: Option<String>,
    /// The category this lesson belongs to.
    pub category_id: Uuid,
    /// When the lesson was created.
    pub created_at: DateTime<Utc>,
    /// The teacher who owns the lesson, if recorded.
    pub teacher_id: Option<Uuid>,
    /// Homework due date, if set.
    pub due_date: Option<DateTime<Utc>>,
}

/// Data required to create a new lesson.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLesson {
    /// Lesson title.
    pub title: String,
    /// Lesson description.
    pub description: String,
    /// Video URL.
    pub video_url: String,
    /// Attached homework file, if any.
    pub homework_file_url: Option<String>,
    /// The category this lesson belongs to.
    pub category_id: Uuid,
    /// The owning teacher, if any.
    pub teacher_id: Option<Uuid>,
    /// Homework due date, if set.
    pub due_date: Option<DateTime<Utc>>,
}

impl From<CreateLesson> for Lesson {
    /// Materializes the record with a fresh id and creation timestamp.
    fn from(record: CreateLesson) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: record.title,
            description: record.description,
            video_url: record.video_url,
            homework_file_url: record.homework_file_url,
            category_id: record.category_id,
            created_at: Utc::now(),
            teacher_id: record.teacher_id,
            due_date: record.due_date,
        }
    }
}

/// Partial update for an existing lesson; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLesson {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New video URL.
    pub video_url: Option<String>,
    /// New homework file.
    pub homework_file_url: Option<String>,
    /// New category.
    pub category_id: Option<Uuid>,
    /// New due date.
    pub due_date: Option<DateTime<Utc>>,
}

impl Lesson {
    /// Merge a partial update into this record.
    pub fn apply(&mut self, updates: UpdateLesson) {
        if let Some(title) = updates.title {
            self.title = title;
        }
        if let Some(description) = updates.description {
            self.description = description;
        }
        if let Some(video_url) = updates.video_url {
            self.video_url = video_url;
        }
        if let Some(homework_file_url) = updates.homework_file_url {
            self.homework_file_url = Some(homework_file_url);
        }
        if let Some(category_id) = updates.category_id {
            self.category_id = category_id;
        }
        if let Some(due_date) = updates.due_date {
            self.due_date = Some(due_date);
        }
    }
}
