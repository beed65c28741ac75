//! In-memory storage implementation.
//!
//! Records live in plain vectors for the lifetime of the process; nothing is
//! written back, so every run starts again from the seed data.

use adminview_core::{
    Account, AccountId, Assignment, AssignmentId, Officer, User, WorkItem, WorkItemId,
};
use tracing::debug;
use super::{fixtures, Result, Storage, StorageError};

/// Vector-backed storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    work_items: Vec<WorkItem>,
    users: Vec<User>,
    assignments: Vec<Assignment>,
    accounts: Vec<Account>,
    officers: Vec<Officer>,
}

impl MemoryStorage {
    /// Create empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage holding the bundled sample records.
    pub fn seeded() -> Result<Self> {
        let storage = Self {
            work_items: fixtures::work_items()?,
            users: fixtures::users()?,
            assignments: fixtures::assignments()?,
            accounts: fixtures::accounts()?,
            officers: fixtures::officers()?,
        };
        debug!(
            work_items = storage.work_items.len(),
            users = storage.users.len(),
            assignments = storage.assignments.len(),
            accounts = storage.accounts.len(),
            "Seeded in-memory storage"
        );
        Ok(storage)
    }

    /// Replace the work items.
    pub fn with_work_items(mut self, items: Vec<WorkItem>) -> Self {
        self.work_items = items;
        self
    }

    /// Replace the login users.
    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    /// Replace the assignments.
    pub fn with_assignments(mut self, assignments: Vec<Assignment>) -> Self {
        self.assignments = assignments;
        self
    }

    /// Replace the accounts.
    pub fn with_accounts(mut self, accounts: Vec<Account>) -> Self {
        self.accounts = accounts;
        self
    }
}

/// Replace the record with the same key, or append it.
fn upsert<T: Clone, K: PartialEq>(records: &mut Vec<T>, record: &T, key: impl Fn(&T) -> K) {
    let id = key(record);
    match records.iter().position(|r| key(r) == id) {
        Some(index) => records[index] = record.clone(),
        None => records.push(record.clone()),
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    async fn list_work_items(&self) -> Result<Vec<WorkItem>> {
        Ok(self.work_items.clone())
    }

    async fn load_work_item(&self, id: &WorkItemId) -> Result<Option<WorkItem>> {
        Ok(self.work_items.iter().find(|w| &w.id == id).cloned())
    }

    async fn save_work_item(&mut self, item: &WorkItem) -> Result<()> {
        upsert(&mut self.work_items, item, |w| w.id.clone());
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.users.clone())
    }

    async fn list_assignments(&self) -> Result<Vec<Assignment>> {
        Ok(self.assignments.clone())
    }

    async fn load_assignment(&self, id: AssignmentId) -> Result<Option<Assignment>> {
        Ok(self.assignments.iter().find(|a| a.id == id).cloned())
    }

    async fn save_assignment(&mut self, assignment: &Assignment) -> Result<()> {
        upsert(&mut self.assignments, assignment, |a| a.id);
        Ok(())
    }

    async fn list_accounts(&self) -> Result<Vec<Account>> {
        Ok(self.accounts.clone())
    }

    async fn load_account(&self, id: &AccountId) -> Result<Option<Account>> {
        Ok(self.accounts.iter().find(|a| &a.id == id).cloned())
    }

    async fn save_account(&mut self, account: &Account) -> Result<()> {
        upsert(&mut self.accounts, account, |a| a.id.clone());
        Ok(())
    }

    async fn delete_account(&mut self, id: &AccountId) -> Result<()> {
        let before = self.accounts.len();
        self.accounts.retain(|a| &a.id != id);
        if self.accounts.len() == before {
            return Err(StorageError::NotFound(format!("account {id}")));
        }
        Ok(())
    }

    async fn list_officers(&self) -> Result<Vec<Officer>> {
        Ok(self.officers.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adminview_core::WorkStatus;

    #[tokio::test]
    async fn test_seeded_storage_lists_fixtures() {
        let storage = MemoryStorage::seeded().unwrap();
        let items = storage.list_work_items().await.unwrap();
        let ids: Vec<_> = items.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, ["WRK001", "WRK002", "WRK003", "WRK004", "WRK005", "WRK006"]);
        assert_eq!(storage.list_officers().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_save_work_item_updates_in_place() {
        let mut storage = MemoryStorage::seeded().unwrap();
        let id = WorkItemId::new("WRK003");
        let mut item = storage.load_work_item(&id).await.unwrap().unwrap();
        item.status = WorkStatus::Completed;
        storage.save_work_item(&item).await.unwrap();

        let items = storage.list_work_items().await.unwrap();
        assert_eq!(items.len(), 6);
        assert_eq!(items[2].status, WorkStatus::Completed);
    }

    #[tokio::test]
    async fn test_save_work_item_appends_new() {
        let mut storage = MemoryStorage::seeded().unwrap();
        let mut item = storage.list_work_items().await.unwrap()[0].clone();
        item.id = WorkItemId::new("W12345678");
        storage.save_work_item(&item).await.unwrap();

        let items = storage.list_work_items().await.unwrap();
        assert_eq!(items.len(), 7);
        assert_eq!(items[6].id, item.id);
    }

    #[tokio::test]
    async fn test_delete_account() {
        let mut storage = MemoryStorage::seeded().unwrap();
        let id = AccountId::new("USR002");
        storage.delete_account(&id).await.unwrap();
        assert!(storage.load_account(&id).await.unwrap().is_none());
        assert_eq!(storage.list_accounts().await.unwrap().len(), 4);

        let err = storage.delete_account(&id).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_empty_storage() {
        let storage = MemoryStorage::new();
        assert!(storage.list_work_items().await.unwrap().is_empty());
        assert!(storage.list_users().await.unwrap().is_empty());
    }
}
