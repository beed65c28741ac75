//! User and permission management.

use std::sync::{Arc, OnceLock};
use adminview_core::{Account, AccountId, Permission, Role, ValidationErrors};
use adminview_storage::Storage;
use regex::Regex;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::info;
use crate::error::{AccountError, Result};

/// Default permissions granted with each role.
pub fn default_permissions(role: Role) -> Vec<Permission> {
    match role {
        Role::DeptHead => Permission::ALL.to_vec(),
        Role::Collector => vec![
            Permission::CreateWork,
            Permission::EditWork,
            Permission::AssignWork,
            Permission::ViewReports,
            Permission::ApproveWork,
        ],
        Role::EndOfficeWorker => vec![Permission::EditWork],
    }
}

/// Search and filter predicates for the account list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountFilter {
    /// Case-insensitive substring of full name, username or email
    pub search: String,
    /// Exact department
    pub department: Option<String>,
    /// Exact role
    pub role: Option<Role>,
}

impl AccountFilter {
    /// Check one account.
    pub fn matches(&self, account: &Account) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || [&account.full_name, &account.username, &account.email]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
        let matches_department = match self.department.as_deref() {
            None | Some("") => true,
            Some(department) => account.department == department,
        };
        let matches_role = self.role.map_or(true, |role| account.role == role);

        matches_search && matches_department && matches_role
    }

    /// Accounts matching the filter, in input order.
    pub fn apply<'a>(&self, accounts: &'a [Account]) -> Vec<&'a Account> {
        accounts.iter().filter(|a| self.matches(a)).collect()
    }
}

/// The add/edit account form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountForm {
    /// Login name
    pub username: String,
    /// Display name
    pub full_name: String,
    /// Contact email
    pub email: String,
    /// Department
    pub department: String,
    /// Role, unset until chosen
    pub role: Option<Role>,
    /// Whether the account is enabled
    pub is_active: bool,
    /// Granted permissions
    pub permissions: Vec<Permission>,
}

impl Default for AccountForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            full_name: String::new(),
            email: String::new(),
            department: String::new(),
            role: None,
            is_active: true,
            permissions: Vec::new(),
        }
    }
}

fn email_pattern() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").ok()).as_ref()
}

impl AccountForm {
    /// Pre-fill the form for editing an existing account.
    pub fn from_account(account: &Account) -> Self {
        Self {
            username: account.username.clone(),
            full_name: account.full_name.clone(),
            email: account.email.clone(),
            department: account.department.clone(),
            role: Some(account.role),
            is_active: account.is_active,
            permissions: account.permissions.clone(),
        }
    }

    /// Grant the permission if missing, revoke it otherwise.
    pub fn toggle_permission(&mut self, permission: Permission) {
        if let Some(pos) = self.permissions.iter().position(|p| *p == permission) {
            self.permissions.remove(pos);
        } else {
            self.permissions.push(permission);
        }
    }

    /// Check every field, collecting one message per failing field.
    pub fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        self.checked_role().map(|_| ())
    }

    /// The chosen role, provided every field is valid.
    fn checked_role(&self) -> std::result::Result<Role, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.username.trim().is_empty() {
            errors.add("username", "Username is required");
        }
        if self.full_name.trim().is_empty() {
            errors.add("fullName", "Full name is required");
        }
        if self.email.trim().is_empty() {
            errors.add("email", "Email is required");
        } else if !email_pattern().is_some_and(|re| re.is_match(&self.email)) {
            errors.add("email", "Email is invalid");
        }
        if self.department.is_empty() {
            errors.add("department", "Department is required");
        }

        match self.role {
            Some(role) if errors.is_empty() => Ok(role),
            Some(_) => Err(errors),
            None => {
                errors.add("role", "Role is required");
                Err(errors)
            }
        }
    }

    fn into_account(self, id: AccountId, last_login: String) -> std::result::Result<Account, ValidationErrors> {
        let role = self.checked_role()?;
        Ok(Account {
            id,
            username: self.username,
            full_name: self.full_name,
            email: self.email,
            department: self.department,
            role,
            is_active: self.is_active,
            last_login,
            permissions: self.permissions,
        })
    }
}

/// Accounts in one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentSummary {
    /// Department name
    pub department: String,
    /// All accounts in the department
    pub total: usize,
    /// Up to three active account names
    pub active_preview: Vec<String>,
    /// Active accounts not in the preview
    pub more_active: usize,
}

const PREVIEW_LEN: usize = 3;

/// Summaries for the given departments, in the given order.
pub fn department_summaries<'a>(
    accounts: &[Account],
    departments: impl IntoIterator<Item = &'a str>,
) -> Vec<DepartmentSummary> {
    departments
        .into_iter()
        .map(|department| {
            let members: Vec<&Account> =
                accounts.iter().filter(|a| a.department == department).collect();
            let active: Vec<&Account> = members.iter().copied().filter(|a| a.is_active).collect();
            DepartmentSummary {
                department: department.to_string(),
                total: members.len(),
                active_preview: active
                    .iter()
                    .take(PREVIEW_LEN)
                    .map(|a| a.full_name.clone())
                    .collect(),
                more_active: active.len().saturating_sub(PREVIEW_LEN),
            }
        })
        .collect()
}

/// Account management over storage.
pub struct AccountDirectory<S: Storage> {
    storage: Arc<Mutex<S>>,
}

impl<S: Storage> AccountDirectory<S> {
    /// Create a new directory.
    pub fn new(storage: S) -> Self {
        Self {
            storage: Arc::new(Mutex::new(storage)),
        }
    }

    /// Accounts matching the filter.
    pub async fn list(&self, filter: &AccountFilter) -> Result<Vec<Account>> {
        let accounts = self.storage.lock().await.list_accounts().await?;
        Ok(filter.apply(&accounts).into_iter().cloned().collect())
    }

    /// Create an account from a valid form.
    pub async fn create(&self, form: AccountForm) -> Result<Account> {
        let mut storage = self.storage.lock().await;
        let mut sequence = storage.list_accounts().await?.len() + 1;
        // Skip ids still held after earlier deletes
        while storage.load_account(&AccountId::from_sequence(sequence)).await?.is_some() {
            sequence += 1;
        }
        let account = form
            .into_account(AccountId::from_sequence(sequence), "Never".to_string())
            .map_err(AccountError::Validation)?;
        storage.save_account(&account).await?;
        info!(id = %account.id, username = %account.username, "Account created");
        Ok(account)
    }

    /// Replace an account's fields, keeping its id.
    pub async fn update(&self, id: &AccountId, form: AccountForm) -> Result<Account> {
        let mut storage = self.storage.lock().await;
        let existing = storage
            .load_account(id)
            .await?
            .ok_or_else(|| AccountError::NotFound(id.clone()))?;
        let account = form
            .into_account(existing.id, existing.last_login)
            .map_err(AccountError::Validation)?;
        storage.save_account(&account).await?;
        info!(id = %account.id, "Account updated");
        Ok(account)
    }

    /// Remove an account.
    pub async fn delete(&self, id: &AccountId) -> Result<()> {
        let mut storage = self.storage.lock().await;
        if storage.load_account(id).await?.is_none() {
            return Err(AccountError::NotFound(id.clone()));
        }
        storage.delete_account(id).await?;
        info!(%id, "Account deleted");
        Ok(())
    }

    /// Enable a disabled account or disable an enabled one.
    pub async fn toggle_active(&self, id: &AccountId) -> Result<Account> {
        let mut storage = self.storage.lock().await;
        let mut account = storage
            .load_account(id)
            .await?
            .ok_or_else(|| AccountError::NotFound(id.clone()))?;
        account.is_active = !account.is_active;
        storage.save_account(&account).await?;
        info!(%id, active = account.is_active, "Account status toggled");
        Ok(account)
    }

    /// Per-department account summaries.
    pub async fn departments<'a>(
        &self,
        departments: impl IntoIterator<Item = &'a str>,
    ) -> Result<Vec<DepartmentSummary>> {
        let accounts = self.storage.lock().await.list_accounts().await?;
        Ok(department_summaries(&accounts, departments))
    }
}
