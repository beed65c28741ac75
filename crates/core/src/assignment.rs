//! Assignment model - work handed to an individual office worker.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::id::AssignmentId;
use crate::work_item::{Priority, WorkStatus};

/// A task assigned to a single office worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Unique identifier
    pub id: AssignmentId,

    /// Short title
    pub title: String,

    /// What needs to be done
    pub description: String,

    /// Username of the worker
    pub assigned_to: String,

    /// Current status
    pub status: WorkStatus,

    /// Deadline
    pub deadline: NaiveDate,

    /// Priority
    pub priority: Priority,

    /// Department issuing the assignment
    pub department: String,
}

impl Assignment {
    /// Whether the assignment belongs to the given worker.
    pub fn is_assigned_to(&self, username: &str) -> bool {
        self.assigned_to == username
    }
}
