//! # learnhub-service
//!
//! Business logic services for Academy LearnHub. Each service wraps the
//! in-memory stores and enforces the role, validation, and guard rules;
//! the UI surface calls nothing but these services.

pub mod category;
pub mod context;
pub mod identity;
pub mod lesson;
pub mod message;
pub mod prefs;
pub mod submission;

pub use context::CallerContext;
