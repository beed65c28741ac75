//! Work item model - the unit of administrative work tracked by the portal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::error::ParseError;
use crate::id::WorkItemId;
use crate::Time;

/// A unit of administrative work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    /// Unique identifier
    pub id: WorkItemId,

    /// Short title
    pub title: String,

    /// Detailed description
    pub description: String,

    /// Owning department
    pub department: String,

    /// Region the work takes place in
    pub region: String,

    /// Officer id or username of the assignee
    pub assigned_officer: String,

    /// Display name of the assignee
    pub assigned_officer_name: String,

    /// Planned start
    pub start_date: NaiveDate,

    /// Planned completion
    pub due_date: NaiveDate,

    /// Current status
    pub status: WorkStatus,

    /// Percentage complete (0-100)
    pub progress: u8,

    /// Priority
    pub priority: Priority,

    /// Notes in the order they were written
    #[serde(default)]
    pub notes: Vec<Note>,

    /// Attached documents in upload order
    #[serde(default)]
    pub documents: Vec<Document>,

    /// Username of the creator, for items created through the portal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    /// Creation timestamp, for items created through the portal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Time>,
}

impl WorkItem {
    /// Whether the item has been completed.
    pub fn is_completed(&self) -> bool {
        self.status == WorkStatus::Completed
    }
}

/// Lifecycle status shared by work items and assignments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkStatus {
    /// Not started yet
    #[default]
    Pending,
    /// Being worked on
    InProgress,
    /// Done
    Completed,
}

impl WorkStatus {
    /// Every status, in display order.
    pub const ALL: [WorkStatus; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WorkStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in-progress" | "in_progress" | "inprogress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseError::new("status", s)),
        }
    }
}

/// Priority of a work item or assignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait
    Low,
    /// Normal
    #[default]
    Medium,
    /// Needs immediate attention
    High,
}

impl Priority {
    /// Every priority, lowest first.
    pub const ALL: [Priority; 3] = [Self::Low, Self::Medium, Self::High];

    /// Wire name of the priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseError::new("priority", s)),
        }
    }
}

/// A note left on a work item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Who wrote it
    pub author: String,

    /// When it was written
    pub date: NaiveDate,

    /// Note body
    pub content: String,
}

/// A document attached to a work item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Display name
    pub name: String,

    /// File kind
    #[serde(rename = "type")]
    pub kind: DocumentKind,

    /// When it was uploaded
    pub upload_date: NaiveDate,
}

/// Kind of an attached document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// PDF file
    Pdf,
    /// Word document
    Docx,
    /// Scan or photo
    Image,
    /// Anything else
    #[serde(other)]
    Other,
}
