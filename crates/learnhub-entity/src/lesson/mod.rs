//! Lesson domain entities.

pub mod model;

pub use model::{CreateLesson, Lesson, UpdateLesson};
