//! Collaborator traits implemented outside this crate.

pub mod blob;
pub mod client;

pub use blob::BlobStore;
pub use client::ClientStore;
