//! Interactive console surface for LearnHub.
//!
//! Renders role-gated menus over the in-memory services: anonymous
//! visitors get only the login screen, students get lesson browsing and
//! homework, teachers additionally get lesson management and grading,
//! and admins get the full management suite.

pub mod prompt;
pub mod render;
pub mod screens;
pub mod shell;
pub mod state;

pub use shell::Shell;
pub use state::AppState;
