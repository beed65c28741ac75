//! In-memory session store.

use adminview_core::SessionUser;
use super::{Result, SessionStore};

/// Session store that forgets everything when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    user: Option<SessionUser>,
}

impl MemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> Result<Option<SessionUser>> {
        Ok(self.user.clone())
    }

    async fn save(&mut self, user: &SessionUser) -> Result<()> {
        self.user = Some(user.clone());
        Ok(())
    }

    async fn clear(&mut self) -> Result<()> {
        self.user = None;
        Ok(())
    }
}
