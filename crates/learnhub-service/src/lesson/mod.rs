//! Lesson services — catalog CRUD, category filtering, video embedding.

pub mod service;
pub mod video;

pub use service::{CreateLessonRequest, LessonService};
