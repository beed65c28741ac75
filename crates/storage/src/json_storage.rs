//! JSON file session store.
//!
//! Persists the logged-in user as `{"user": {...}}` in a single file, the
//! way a browser would keep it under a local storage key. The file is
//! removed on logout.

use std::path::{Path, PathBuf};
use adminview_core::SessionUser;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;
use super::{Result, SessionStore};

/// On-disk layout of the session file.
#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    user: Option<SessionUser>,
}

/// File-backed session store.
#[derive(Debug, Clone)]
pub struct JsonSessionStore {
    path: PathBuf,
}

impl JsonSessionStore {
    /// Create a store writing to `path`. The parent directory is created on
    /// first save, not here.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Location of the session file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl SessionStore for JsonSessionStore {
    async fn load(&self) -> Result<Option<SessionUser>> {
        let file: Option<SessionFile> = read_json(&self.path).await?;
        Ok(file.and_then(|f| f.user))
    }

    async fn save(&mut self, user: &SessionUser) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let file = SessionFile {
            user: Some(user.clone()),
        };
        let json = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, json.as_bytes()).await?;
        debug!(path = %self.path.display(), username = %user.username, "Session saved");
        Ok(())
    }

    async fn clear(&mut self) -> Result<()> {
        fs::remove_file(&self.path).await.or_else(|e| {
            if e.kind() == std::io::ErrorKind::NotFound { Ok(()) } else { Err(e) }
        })?;
        debug!(path = %self.path.display(), "Session cleared");
        Ok(())
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(json) => {
            let value = serde_json::from_str(&json)?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StorageError;
    use adminview_core::{Role, UserId};

    fn session() -> SessionUser {
        SessionUser {
            id: UserId(2),
            username: "depthead1".to_string(),
            role: Role::DeptHead,
            full_name: "Sarah Johnson".to_string(),
            department: "Agriculture".to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSessionStore::new(dir.path().join("session.json"));
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonSessionStore::new(dir.path().join("nested").join("session.json"));

        store.save(&session()).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(session()));

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["user"]["fullName"], "Sarah Johnson");
        assert_eq!(json["user"]["role"], "deptHead");

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
        // Clearing twice is fine
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = JsonSessionStore::new(&path);
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StorageError::Json(_)));
    }
}
