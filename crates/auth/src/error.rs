//! Authentication, access and account errors.

use adminview_core::{AccountId, Role, ValidationErrors};
use adminview_storage::StorageError;
use crate::access::Route;

/// Result alias for account operations.
pub type Result<T> = std::result::Result<T, AccountError>;

/// Login failures.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Username, password or role left blank
    #[error("Please fill in all fields")]
    MissingFields,

    /// No user matches the username/password/role triple
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The user list could not be read
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A route was requested without the required role.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// Nobody is logged in
    #[error("Login required to open {0}")]
    Unauthenticated(Route),

    /// The logged-in role may not open the route
    #[error("Role {role} may not open {route}")]
    Forbidden {
        /// Role of the current user
        role: Role,
        /// Requested route
        route: Route,
    },
}

impl AccessError {
    /// Where the user is sent instead.
    pub fn redirect(&self) -> Route {
        Route::Login
    }
}

/// Account management failures.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// The form has invalid fields
    #[error("Invalid account form: {0}")]
    Validation(ValidationErrors),

    /// No account with that id
    #[error("Account not found: {0}")]
    NotFound(AccountId),

    /// Storage failure
    #[error(transparent)]
    Storage(#[from] StorageError),
}
