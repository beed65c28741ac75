//! Managed accounts, permissions and field officers.

use serde::{Deserialize, Serialize};
use crate::error::ParseError;
use crate::id::{AccountId, OfficerId};
use crate::user::Role;

/// An account as shown on the user management page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Login name
    pub username: String,

    /// Display name
    pub full_name: String,

    /// Contact email
    pub email: String,

    /// Department
    pub department: String,

    /// Access level
    pub role: Role,

    /// Disabled accounts stay listed but cannot be used
    pub is_active: bool,

    /// Last login as free text (`Never` for new accounts)
    pub last_login: String,

    /// Granted permissions
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl Account {
    /// Whether the permission has been granted.
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}

/// A single grantable permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Create work items
    CreateWork,
    /// Edit work items
    EditWork,
    /// Delete work items
    DeleteWork,
    /// Assign work to officers
    AssignWork,
    /// Open the reports page
    ViewReports,
    /// Manage accounts
    ManageUsers,
    /// Approve completed work
    ApproveWork,
    /// See work outside the own department
    ViewAllDepartments,
}

impl Permission {
    /// Every permission, in display order.
    pub const ALL: [Permission; 8] = [
        Self::CreateWork,
        Self::EditWork,
        Self::DeleteWork,
        Self::AssignWork,
        Self::ViewReports,
        Self::ManageUsers,
        Self::ApproveWork,
        Self::ViewAllDepartments,
    ];

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateWork => "create_work",
            Self::EditWork => "edit_work",
            Self::DeleteWork => "delete_work",
            Self::AssignWork => "assign_work",
            Self::ViewReports => "view_reports",
            Self::ManageUsers => "manage_users",
            Self::ApproveWork => "approve_work",
            Self::ViewAllDepartments => "view_all_departments",
        }
    }

    /// Display name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CreateWork => "Create Work Items",
            Self::EditWork => "Edit Work Items",
            Self::DeleteWork => "Delete Work Items",
            Self::AssignWork => "Assign Work Items",
            Self::ViewReports => "View Reports",
            Self::ManageUsers => "Manage Users",
            Self::ApproveWork => "Approve Work Items",
            Self::ViewAllDepartments => "View All Departments",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Permission {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s.trim())
            .ok_or_else(|| ParseError::new("permission", s))
    }
}

/// A field officer that work can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Officer {
    /// Unique identifier
    pub id: OfficerId,

    /// Display name
    pub name: String,

    /// Department
    pub department: String,
}
