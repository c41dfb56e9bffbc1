//! # learnhub-entity
//!
//! Domain entity models for Academy LearnHub. Every struct in this crate
//! represents a record held by one of the in-memory stores or a domain
//! value object. All entities derive `Debug`, `Clone`, `Serialize`, and
//! `Deserialize`.

pub mod category;
pub mod lesson;
pub mod message;
pub mod submission;
pub mod user;
