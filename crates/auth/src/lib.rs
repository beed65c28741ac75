//! Login, route gating and account management.
//!
//! Users log in with a username, password and role. The role decides which
//! pages they may open. Department heads also manage the account list.

#![warn(missing_docs)]

mod error;
pub mod credentials;
pub mod access;
pub mod session;
pub mod accounts;

pub use error::{AccessError, AccountError, AuthError, Result};
pub use credentials::authenticate;
pub use access::{check, landing_route, require, Route};
pub use session::{AuthService, LoginOutcome};
pub use accounts::{
    default_permissions, department_summaries, AccountDirectory, AccountFilter, AccountForm,
    DepartmentSummary,
};
