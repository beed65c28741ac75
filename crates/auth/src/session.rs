//! Login session service.

use std::sync::Arc;
use adminview_core::{Role, SessionUser};
use adminview_storage::{SessionStore, Storage};
use tracing::{error, info, warn};
use crate::access::{self, landing_route, Route};
use crate::credentials::authenticate;
use crate::error::{AccessError, AuthError};

/// Outcome of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    /// The logged-in user
    pub user: SessionUser,

    /// Page to show next
    pub landing: Route,
}

/// Keeps track of who is logged in.
///
/// Session store failures are logged and never fail the caller: a session
/// that cannot be read is treated as logged out, and a session that cannot
/// be written still logs the user in for the current run.
pub struct AuthService<S: Storage, T: SessionStore> {
    storage: Arc<S>,
    sessions: T,
    current: Option<SessionUser>,
}

impl<S: Storage, T: SessionStore> AuthService<S, T> {
    /// Create a service with nobody logged in.
    pub fn new(storage: S, sessions: T) -> Self {
        Self {
            storage: Arc::new(storage),
            sessions,
            current: None,
        }
    }

    /// Pick up the session stored by an earlier run.
    pub async fn restore(&mut self) -> Option<&SessionUser> {
        self.current = match self.sessions.load().await {
            Ok(user) => user,
            Err(e) => {
                error!("Error reading stored session: {}", e);
                None
            }
        };
        self.current.as_ref()
    }

    /// Log in with a username, password and role.
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
        role: Option<Role>,
    ) -> Result<LoginOutcome, AuthError> {
        let role = match role {
            Some(role) if !username.is_empty() && !password.is_empty() => role,
            _ => return Err(AuthError::MissingFields),
        };

        let users = self.storage.list_users().await?;
        let Some(user) = authenticate(&users, username, password, role) else {
            warn!(username, %role, "Login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        let session = user.session();
        if let Err(e) = self.sessions.save(&session).await {
            error!("Error writing session: {}", e);
        }
        info!(username, %role, "Logged in");

        self.current = Some(session.clone());
        Ok(LoginOutcome {
            landing: landing_route(session.role),
            user: session,
        })
    }

    /// Forget the current user.
    pub async fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            info!(username = %user.username, "Logged out");
        }
        if let Err(e) = self.sessions.clear().await {
            error!("Error removing session: {}", e);
        }
    }

    /// The logged-in user, if any.
    pub fn current(&self) -> Option<&SessionUser> {
        self.current.as_ref()
    }

    /// The logged-in user, provided they may open `route`.
    pub fn authorize(&self, route: Route) -> Result<&SessionUser, AccessError> {
        access::require(self.current.as_ref(), route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adminview_storage::{
        JsonSessionStore, MemorySessionStore, MemoryStorage, Result as StorageResult, StorageError,
    };

    /// A session store whose every operation fails.
    struct BrokenSessionStore;

    #[async_trait::async_trait]
    impl SessionStore for BrokenSessionStore {
        async fn load(&self) -> StorageResult<Option<SessionUser>> {
            Err(StorageError::Other("storage unavailable".to_string()))
        }
        async fn save(&mut self, _user: &SessionUser) -> StorageResult<()> {
            Err(StorageError::Other("storage unavailable".to_string()))
        }
        async fn clear(&mut self) -> StorageResult<()> {
            Err(StorageError::Other("storage unavailable".to_string()))
        }
    }

    fn service() -> AuthService<MemoryStorage, MemorySessionStore> {
        AuthService::new(MemoryStorage::seeded().unwrap(), MemorySessionStore::new())
    }

    #[tokio::test]
    async fn test_login_success() {
        let mut auth = service();
        let outcome = auth
            .login("collector1", "password", Some(Role::Collector))
            .await
            .unwrap();
        assert_eq!(outcome.user.full_name, "John Collector");
        assert_eq!(outcome.landing, Route::Dashboard);
        assert_eq!(auth.current().map(|u| u.username.as_str()), Some("collector1"));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut auth = service();
        let err = auth
            .login("collector1", "wrong", Some(Role::Collector))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(auth.current().is_none());
    }

    #[tokio::test]
    async fn test_login_missing_fields() {
        let mut auth = service();
        for (user, pass, role) in [
            ("", "password", Some(Role::Collector)),
            ("collector1", "", Some(Role::Collector)),
            ("collector1", "password", None),
        ] {
            let err = auth.login(user, pass, role).await.unwrap_err();
            assert_eq!(err.to_string(), "Please fill in all fields");
        }
    }

    #[tokio::test]
    async fn test_worker_lands_on_assignments() {
        let mut auth = service();
        let outcome = auth
            .login("worker1", "password", Some(Role::EndOfficeWorker))
            .await
            .unwrap();
        assert_eq!(outcome.landing, Route::Assignments);
        assert!(auth.authorize(Route::Assignments).is_ok());
        assert!(auth.authorize(Route::Reports).is_err());
    }

    #[tokio::test]
    async fn test_session_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut first = AuthService::new(MemoryStorage::seeded().unwrap(), JsonSessionStore::new(&path));
        first
            .login("depthead1", "password", Some(Role::DeptHead))
            .await
            .unwrap();

        let mut second = AuthService::new(MemoryStorage::seeded().unwrap(), JsonSessionStore::new(&path));
        let restored = second.restore().await.unwrap();
        assert_eq!(restored.username, "depthead1");
        assert!(second.authorize(Route::ManageUsers).is_ok());

        second.logout().await;
        assert!(second.current().is_none());

        let mut third = AuthService::new(MemoryStorage::seeded().unwrap(), JsonSessionStore::new(&path));
        assert!(third.restore().await.is_none());
    }

    #[tokio::test]
    async fn test_broken_store_is_not_fatal() {
        let mut auth = AuthService::new(MemoryStorage::seeded().unwrap(), BrokenSessionStore);
        assert!(auth.restore().await.is_none());

        let outcome = auth
            .login("collector1", "password", Some(Role::Collector))
            .await
            .unwrap();
        assert_eq!(outcome.user.username, "collector1");
        assert!(auth.current().is_some());

        auth.logout().await;
        assert!(auth.current().is_none());
    }

    #[tokio::test]
    async fn test_unauthenticated_access_denied() {
        let auth = service();
        let err = auth.authorize(Route::Dashboard).unwrap_err();
        assert_eq!(err, AccessError::Unauthenticated(Route::Dashboard));
    }
}
