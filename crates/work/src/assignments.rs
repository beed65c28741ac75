//! Office worker assignments.

use std::sync::Arc;
use adminview_core::{Assignment, AssignmentId, WorkStatus};
use adminview_storage::Storage;
use tokio::sync::Mutex;
use tracing::{info, warn};
use crate::error::{Result, WorkError};

/// The assignment list of office workers.
pub struct AssignmentBoard<S: Storage> {
    storage: Arc<Mutex<S>>,
}

impl<S: Storage> AssignmentBoard<S> {
    /// Create a new board.
    pub fn new(storage: S) -> Self {
        Self {
            storage: Arc::new(Mutex::new(storage)),
        }
    }

    /// Assignments of one worker, in storage order.
    pub async fn list_for(&self, username: &str) -> Result<Vec<Assignment>> {
        let assignments = self.storage.lock().await.list_assignments().await?;
        Ok(assignments
            .into_iter()
            .filter(|a| a.is_assigned_to(username))
            .collect())
    }

    /// Change the status of one of the worker's own assignments.
    pub async fn update_status(
        &self,
        username: &str,
        id: AssignmentId,
        status: WorkStatus,
    ) -> Result<Assignment> {
        let mut storage = self.storage.lock().await;
        let mut assignment = storage
            .load_assignment(id)
            .await?
            .ok_or(WorkError::AssignmentNotFound(id))?;

        if !assignment.is_assigned_to(username) {
            warn!(%id, username, "Rejected update of another worker's assignment");
            return Err(WorkError::NotAssigned {
                id,
                username: username.to_string(),
            });
        }

        assignment.status = status;
        storage.save_assignment(&assignment).await?;
        info!(%id, %status, "Assignment updated");
        Ok(assignment)
    }
}
