//! Storage abstraction and implementations for AdminView.
//!
//! This crate provides a trait-based storage interface over the portal's
//! records, an in-memory implementation seeded from bundled fixtures, and
//! session stores for keeping the logged-in user between runs.

#![warn(missing_docs)]

pub mod trait_;
pub mod fixtures;
pub mod memory_storage;
pub mod session;
pub mod json_storage;

pub use trait_::{Storage, SessionStore, StorageError, Result};
pub use memory_storage::MemoryStorage;
pub use session::MemorySessionStore;
pub use json_storage::JsonSessionStore;
