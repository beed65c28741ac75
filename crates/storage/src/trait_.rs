//! Storage trait abstraction.

use async_trait::async_trait;
use adminview_core::{
    Account, AccountId, Assignment, AssignmentId, Officer, SessionUser, User, WorkItem, WorkItemId,
};

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Item not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Storage abstraction over the portal's records.
///
/// Writes take `&mut self`; listing preserves insertion order.
#[async_trait]
pub trait Storage: Send + Sync {
    // === Work item operations ===

    /// List all work items.
    async fn list_work_items(&self) -> Result<Vec<WorkItem>>;

    /// Load a work item by ID.
    async fn load_work_item(&self, id: &WorkItemId) -> Result<Option<WorkItem>>;

    /// Save a work item (create or update).
    async fn save_work_item(&mut self, item: &WorkItem) -> Result<()>;

    // === User operations ===

    /// List all login users.
    async fn list_users(&self) -> Result<Vec<User>>;

    // === Assignment operations ===

    /// List all assignments.
    async fn list_assignments(&self) -> Result<Vec<Assignment>>;

    /// Load an assignment by ID.
    async fn load_assignment(&self, id: AssignmentId) -> Result<Option<Assignment>>;

    /// Save an assignment (create or update).
    async fn save_assignment(&mut self, assignment: &Assignment) -> Result<()>;

    // === Account operations ===

    /// List all managed accounts.
    async fn list_accounts(&self) -> Result<Vec<Account>>;

    /// Load an account by ID.
    async fn load_account(&self, id: &AccountId) -> Result<Option<Account>>;

    /// Save an account (create or update).
    async fn save_account(&mut self, account: &Account) -> Result<()>;

    /// Delete an account.
    async fn delete_account(&mut self, id: &AccountId) -> Result<()>;

    // === Officer operations ===

    /// List the field officers work can be assigned to.
    async fn list_officers(&self) -> Result<Vec<Officer>>;
}

/// Holder of the logged-in user between runs.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the stored session, if any.
    async fn load(&self) -> Result<Option<SessionUser>>;

    /// Store the session, replacing any previous one.
    async fn save(&mut self, user: &SessionUser) -> Result<()>;

    /// Forget the stored session.
    async fn clear(&mut self) -> Result<()>;
}
