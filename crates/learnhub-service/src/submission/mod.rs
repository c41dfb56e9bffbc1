//! Submission services — the pending → graded homework workflow.

pub mod service;

pub use service::{GradeRequest, SubmissionService};
