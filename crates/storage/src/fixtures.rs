//! Bundled sample records the portal starts from.
//!
//! The records are embedded at compile time and parsed on demand, so a
//! malformed fixture surfaces as a [`StorageError::Json`](crate::StorageError).

use adminview_core::{Account, Assignment, Officer, User, WorkItem};
use serde::de::DeserializeOwned;
use super::Result;

const WORK_ITEMS: &str = include_str!("../fixtures/work_items.json");
const USERS: &str = include_str!("../fixtures/users.json");
const ASSIGNMENTS: &str = include_str!("../fixtures/assignments.json");
const ACCOUNTS: &str = include_str!("../fixtures/accounts.json");
const OFFICERS: &str = include_str!("../fixtures/officers.json");

/// Sample work items.
pub fn work_items() -> Result<Vec<WorkItem>> {
    parse(WORK_ITEMS)
}

/// Sample login users.
pub fn users() -> Result<Vec<User>> {
    parse(USERS)
}

/// Sample worker assignments.
pub fn assignments() -> Result<Vec<Assignment>> {
    parse(ASSIGNMENTS)
}

/// Sample managed accounts.
pub fn accounts() -> Result<Vec<Account>> {
    parse(ACCOUNTS)
}

/// Sample field officers.
pub fn officers() -> Result<Vec<Officer>> {
    parse(OFFICERS)
}

fn parse<T: DeserializeOwned>(json: &str) -> Result<Vec<T>> {
    Ok(serde_json::from_str(json)?)
}
