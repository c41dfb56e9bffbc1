//! Messaging services — the direct-message panel.

pub mod service;

pub use service::MessageService;
