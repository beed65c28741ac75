//! Work management errors.

use adminview_core::{AssignmentId, ValidationErrors, WorkItemId};
use adminview_storage::StorageError;

/// Result alias for work operations.
pub type Result<T> = std::result::Result<T, WorkError>;

/// Errors raised while creating or updating work.
#[derive(Debug, thiserror::Error)]
pub enum WorkError {
    /// The work form has invalid fields
    #[error("Invalid work form: {0}")]
    Validation(ValidationErrors),

    /// No work item with that id
    #[error("Work item not found: {0}")]
    NotFound(WorkItemId),

    /// No assignment with that id
    #[error("Assignment not found: {0}")]
    AssignmentNotFound(AssignmentId),

    /// The assignment belongs to another worker
    #[error("Assignment {id} is not assigned to {username}")]
    NotAssigned {
        /// Assignment id
        id: AssignmentId,
        /// Worker who attempted the update
        username: String,
    },

    /// Progress outside 0-100
    #[error("Progress must be between 0 and 100, got {0}")]
    InvalidProgress(u32),

    /// Blank note content
    #[error("Note content is required")]
    EmptyNote,

    /// Storage failure
    #[error(transparent)]
    Storage(#[from] StorageError),
}
