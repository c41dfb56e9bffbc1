//! Identity services — the user roster and the single active session.

pub mod service;
pub mod session;

pub use service::{CreateUserRequest, IdentityService};
pub use session::ActiveSession;
