//! Work management service.

use std::sync::Arc;
use async_trait::async_trait;
use chrono::NaiveDate;
use adminview_core::{Note, Time, WorkItem, WorkItemId, WorkStatus};
use adminview_storage::Storage;
use tokio::sync::Mutex;
use tracing::info;
use crate::draft::WorkDraft;
use crate::error::{Result, WorkError};

/// Work management service.
#[async_trait]
pub trait WorkManager: Send + Sync {
    /// Create a work item from a valid draft.
    async fn create_work(&mut self, draft: WorkDraft, created_by: &str, now: Time)
        -> Result<WorkItem>;

    /// Load one work item.
    async fn get_work(&self, id: &WorkItemId) -> Result<WorkItem>;

    /// Append a note.
    async fn add_note(
        &mut self,
        id: &WorkItemId,
        author: &str,
        date: NaiveDate,
        content: &str,
    ) -> Result<WorkItem>;

    /// Set the completion percentage.
    async fn set_progress(&mut self, id: &WorkItemId, progress: u32) -> Result<WorkItem>;

    /// Set the status.
    async fn set_status(&mut self, id: &WorkItemId, status: WorkStatus) -> Result<WorkItem>;
}

/// Basic work manager implementation.
pub struct BasicWorkManager<S: Storage> {
    storage: Arc<Mutex<S>>,
}

impl<S: Storage> BasicWorkManager<S> {
    /// Create a new work manager.
    pub fn new(storage: S) -> Self {
        Self {
            storage: Arc::new(Mutex::new(storage)),
        }
    }

    async fn update<F>(&self, id: &WorkItemId, change: F) -> Result<WorkItem>
    where
        F: FnOnce(&mut WorkItem) + Send,
    {
        let mut storage = self.storage.lock().await;
        let mut item = storage
            .load_work_item(id)
            .await?
            .ok_or_else(|| WorkError::NotFound(id.clone()))?;
        change(&mut item);
        storage.save_work_item(&item).await?;
        Ok(item)
    }
}

#[async_trait]
impl<S: Storage + 'static> WorkManager for BasicWorkManager<S> {
    async fn create_work(
        &mut self,
        draft: WorkDraft,
        created_by: &str,
        now: Time,
    ) -> Result<WorkItem> {
        let item = draft
            .into_work_item(created_by, now)
            .map_err(WorkError::Validation)?;

        self.storage.lock().await.save_work_item(&item).await?;
        info!(id = %item.id, created_by, "Work item created");
        Ok(item)
    }

    async fn get_work(&self, id: &WorkItemId) -> Result<WorkItem> {
        self.storage
            .lock()
            .await
            .load_work_item(id)
            .await?
            .ok_or_else(|| WorkError::NotFound(id.clone()))
    }

    async fn add_note(
        &mut self,
        id: &WorkItemId,
        author: &str,
        date: NaiveDate,
        content: &str,
    ) -> Result<WorkItem> {
        let content = content.trim();
        if content.is_empty() {
            return Err(WorkError::EmptyNote);
        }

        let note = Note {
            author: author.to_string(),
            date,
            content: content.to_string(),
        };
        let item = self.update(id, |item| item.notes.push(note)).await?;
        info!(%id, author, notes = item.notes.len(), "Note added");
        Ok(item)
    }

    async fn set_progress(&mut self, id: &WorkItemId, progress: u32) -> Result<WorkItem> {
        let progress = u8::try_from(progress)
            .ok()
            .filter(|p| *p <= 100)
            .ok_or(WorkError::InvalidProgress(progress))?;

        let item = self.update(id, |item| item.progress = progress).await?;
        info!(%id, progress, "Progress updated");
        Ok(item)
    }

    async fn set_status(&mut self, id: &WorkItemId, status: WorkStatus) -> Result<WorkItem> {
        let item = self.update(id, |item| item.status = status).await?;
        info!(%id, %status, "Status updated");
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adminview_storage::{fixtures, MemoryStorage};
    use chrono::DateTime;

    fn manager() -> BasicWorkManager<MemoryStorage> {
        BasicWorkManager::new(MemoryStorage::seeded().unwrap())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_create_work() {
        let mut manager = manager();
        let officers = fixtures::officers().unwrap();
        let mut draft = WorkDraft::new();
        draft.title = "Road Patching".to_string();
        draft.set_department("Public Works");
        draft.region = "South".to_string();
        draft.select_officer("OFF001", &officers);
        draft.start_date = Some(date(2023, 12, 4));
        draft.due_date = Some(date(2024, 1, 10));
        draft.description = "Patch potholes on the ring road".to_string();

        let now = DateTime::from_timestamp_millis(1_701_234_567_890).unwrap();
        let item = manager.create_work(draft, "collector1", now).await.unwrap();
        assert_eq!(item.id.as_str(), "W34567890");

        let loaded = manager.get_work(&item.id).await.unwrap();
        assert_eq!(loaded.assigned_officer_name, "John Doe");
    }

    #[tokio::test]
    async fn test_create_invalid_draft() {
        let mut manager = manager();
        let err = manager
            .create_work(WorkDraft::new(), "collector1", chrono::Utc::now())
            .await
            .unwrap_err();
        assert!(matches!(err, WorkError::Validation(_)));
    }

    #[tokio::test]
    async fn test_add_note() {
        let mut manager = manager();
        let id = WorkItemId::new("WRK001");
        let item = manager
            .add_note(&id, "John Collector", date(2023, 12, 1), "Boundary dispute resolved.")
            .await
            .unwrap();
        assert_eq!(item.notes.len(), 3);
        assert_eq!(item.notes[2].author, "John Collector");

        let err = manager.add_note(&id, "John Collector", date(2023, 12, 1), "   ").await;
        assert!(matches!(err, Err(WorkError::EmptyNote)));
    }

    #[tokio::test]
    async fn test_set_progress_bounds() {
        let mut manager = manager();
        let id = WorkItemId::new("WRK003");

        assert_eq!(manager.set_progress(&id, 100).await.unwrap().progress, 100);
        assert!(matches!(
            manager.set_progress(&id, 101).await,
            Err(WorkError::InvalidProgress(101))
        ));
        assert!(matches!(
            manager.set_progress(&id, 1_000).await,
            Err(WorkError::InvalidProgress(1_000))
        ));
        assert_eq!(manager.get_work(&id).await.unwrap().progress, 100);
    }

    #[tokio::test]
    async fn test_set_status_unknown_item() {
        let mut manager = manager();
        let done = manager
            .set_status(&WorkItemId::new("WRK002"), WorkStatus::Completed)
            .await
            .unwrap();
        assert!(done.is_completed());

        let missing = manager
            .set_status(&WorkItemId::new("WRK404"), WorkStatus::Completed)
            .await;
        assert!(matches!(missing, Err(WorkError::NotFound(_))));
    }
}
