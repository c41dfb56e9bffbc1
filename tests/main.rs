//! Integration test suite over the seeded in-memory application.

mod integration;
