//! Category services — forest maintenance and hierarchy queries.

pub mod service;
pub mod tree;

pub use service::{CategoryService, CreateCategoryRequest, UpdateCategoryRequest};
