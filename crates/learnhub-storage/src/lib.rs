//! # learnhub-storage
//!
//! In-process implementations of the collaborator traits declared in
//! `learnhub-core`: a memory-backed [`BlobStore`](learnhub_core::traits::BlobStore)
//! standing in for file uploads, and a memory-backed
//! [`ClientStore`](learnhub_core::traits::ClientStore) standing in for the
//! browser's session/local storage.

pub mod client;
pub mod memory;

pub use client::MemoryClientStore;
pub use memory::MemoryBlobStore;
