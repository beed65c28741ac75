//! Login users, roles and the persisted session record.

use serde::{Deserialize, Serialize};
use crate::error::ParseError;
use crate::id::UserId;

/// Access level of a portal user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    /// District collector: dashboards, work creation, reports
    Collector,
    /// Department head: everything a collector sees plus user management
    DeptHead,
    /// Office worker: own assignments only
    EndOfficeWorker,
}

impl Role {
    /// Every role, in display order.
    pub const ALL: [Role; 3] = [Self::Collector, Self::DeptHead, Self::EndOfficeWorker];

    /// Wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Collector => "collector",
            Self::DeptHead => "deptHead",
            Self::EndOfficeWorker => "endOfficeWorker",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Collector => "Collector",
            Self::DeptHead => "Department Head",
            Self::EndOfficeWorker => "Office Worker",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "collector" => Ok(Self::Collector),
            "deptHead" | "dept-head" | "depthead" => Ok(Self::DeptHead),
            "endOfficeWorker" | "end-office-worker" | "worker" => Ok(Self::EndOfficeWorker),
            _ => Err(ParseError::new("role", s)),
        }
    }
}

/// A user able to log in to the portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier
    pub id: UserId,

    /// Login name
    pub username: String,

    /// Plaintext password (demo data only)
    pub password: String,

    /// Access level
    pub role: Role,

    /// Display name
    pub full_name: String,

    /// Department the user belongs to
    pub department: String,
}

impl User {
    /// The session record for this user. The password is never part of it.
    pub fn session(&self) -> SessionUser {
        SessionUser {
            id: self.id,
            username: self.username.clone(),
            role: self.role,
            full_name: self.full_name.clone(),
            department: self.department.clone(),
        }
    }
}

/// The logged-in user as persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// User identifier
    pub id: UserId,

    /// Login name
    pub username: String,

    /// Access level
    pub role: Role,

    /// Display name
    pub full_name: String,

    /// Department
    pub department: String,
}
