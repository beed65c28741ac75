//! Work creation and updates.
//!
//! The create-work form, the work manager that persists and updates work
//! items, and the assignment board office workers use.

#![warn(missing_docs)]

mod error;
pub mod draft;
pub mod manager;
pub mod assignments;

pub use error::{Result, WorkError};
pub use draft::{officers_for, WorkDraft};
pub use manager::{BasicWorkManager, WorkManager};
pub use assignments::AssignmentBoard;
