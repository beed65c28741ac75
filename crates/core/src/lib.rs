//! AdminView core data models.
//!
//! This crate defines the records the administrative portal works on:
//! work items, login users, worker assignments and managed accounts.

#![warn(missing_docs)]

// Core identities
mod id;
mod error;
mod validation;

// Work tracking
mod work_item;
mod assignment;

// People and access
mod user;
mod account;

// Re-exports
pub use id::*;
pub use error::ParseError;
pub use validation::{ValidationErrors, FieldError};

// Work
pub use work_item::{WorkItem, WorkStatus, Priority, Note, Document, DocumentKind};
pub use assignment::Assignment;

// Users & Accounts
pub use user::{User, Role, SessionUser};
pub use account::{Account, Permission, Officer};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
