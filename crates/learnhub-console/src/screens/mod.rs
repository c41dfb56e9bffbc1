//! Console screens, one module per surface area.

pub mod auth;
pub mod categories;
pub mod chat;
pub mod grading;
pub mod homework;
pub mod lessons;
pub mod settings;
pub mod users;
