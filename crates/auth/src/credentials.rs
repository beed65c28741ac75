//! Credential check against the user list.

use adminview_core::{Role, User};

/// Find the user matching all three of username, password and role.
///
/// This is a plain linear scan over plaintext passwords, suitable for demo
/// data only.
pub fn authenticate<'a>(
    users: &'a [User],
    username: &str,
    password: &str,
    role: Role,
) -> Option<&'a User> {
    users
        .iter()
        .find(|u| u.username == username && u.password == password && u.role == role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use adminview_storage::fixtures;

    #[test]
    fn test_exact_match_succeeds() {
        let users = fixtures::users().unwrap();
        let user = authenticate(&users, "collector1", "password", Role::Collector).unwrap();
        assert_eq!(user.full_name, "John Collector");
    }

    #[test]
    fn test_wrong_password_fails() {
        let users = fixtures::users().unwrap();
        assert!(authenticate(&users, "collector1", "wrong", Role::Collector).is_none());
    }

    #[test]
    fn test_wrong_role_fails() {
        let users = fixtures::users().unwrap();
        assert!(authenticate(&users, "collector1", "password", Role::DeptHead).is_none());
        assert!(authenticate(&users, "worker1", "password", Role::EndOfficeWorker).is_some());
    }

    #[test]
    fn test_username_is_case_sensitive() {
        let users = fixtures::users().unwrap();
        assert!(authenticate(&users, "Collector1", "password", Role::Collector).is_none());
    }

    #[test]
    fn test_empty_user_list() {
        assert!(authenticate(&[], "collector1", "password", Role::Collector).is_none());
    }
}
