//! Homework submission domain entities.

pub mod model;
pub mod status;

pub use model::HomeworkSubmission;
pub use status::SubmissionStatus;
