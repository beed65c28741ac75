//! Role-based route gating.

use adminview_core::{Role, SessionUser};
use serde::Serialize;
use crate::error::AccessError;

/// A page of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    /// Sign-in page, open to everyone
    Login,
    /// Overview for collectors and department heads
    Dashboard,
    /// Work creation form
    CreateWork,
    /// Progress reports
    Reports,
    /// User and permission management
    ManageUsers,
    /// An office worker's own assignments
    Assignments,
}

impl Route {
    /// Every route.
    pub const ALL: [Route; 6] = [
        Self::Login,
        Self::Dashboard,
        Self::CreateWork,
        Self::Reports,
        Self::ManageUsers,
        Self::Assignments,
    ];

    /// URL path of the page.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::CreateWork => "/create-work",
            Self::Reports => "/reports",
            Self::ManageUsers => "/manage-users",
            Self::Assignments => "/assignments",
        }
    }

    /// Roles allowed to open the page. Empty means public.
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Self::Login => &[],
            Self::Dashboard | Self::CreateWork | Self::Reports => {
                &[Role::Collector, Role::DeptHead]
            }
            Self::ManageUsers => &[Role::DeptHead],
            Self::Assignments => &[Role::EndOfficeWorker],
        }
    }

    /// Whether anyone may open the page.
    pub fn is_public(&self) -> bool {
        self.allowed_roles().is_empty()
    }

    /// Whether `role` may open the page.
    pub fn allows(&self, role: Role) -> bool {
        self.is_public() || self.allowed_roles().contains(&role)
    }

    /// Protected pages the role may open, in menu order.
    pub fn accessible_by(role: Role) -> Vec<Route> {
        Self::ALL
            .into_iter()
            .filter(|r| !r.is_public() && r.allows(role))
            .collect()
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Page a user lands on right after logging in.
pub fn landing_route(role: Role) -> Route {
    match role {
        Role::Collector | Role::DeptHead => Route::Dashboard,
        Role::EndOfficeWorker => Route::Assignments,
    }
}

/// Check whether the (possibly absent) user may open `route`.
pub fn check(user: Option<&SessionUser>, route: Route) -> Result<(), AccessError> {
    if route.is_public() {
        return Ok(());
    }
    match user {
        None => Err(AccessError::Unauthenticated(route)),
        Some(user) if route.allows(user.role) => Ok(()),
        Some(user) => Err(AccessError::Forbidden {
            role: user.role,
            route,
        }),
    }
}

/// Like [`check`], returning the user for protected pages.
pub fn require(user: Option<&SessionUser>, route: Route) -> Result<&SessionUser, AccessError> {
    check(user, route)?;
    user.ok_or(AccessError::Unauthenticated(route))
}

#[cfg(test)]
mod tests {
    use super::*;
    use adminview_core::UserId;

    fn user(role: Role) -> SessionUser {
        SessionUser {
            id: UserId(1),
            username: "someone".to_string(),
            role,
            full_name: "Some One".to_string(),
            department: "Revenue".to_string(),
        }
    }

    #[test]
    fn test_login_is_public() {
        assert!(check(None, Route::Login).is_ok());
        assert!(check(Some(&user(Role::EndOfficeWorker)), Route::Login).is_ok());
    }

    #[test]
    fn test_unauthenticated_redirects_to_login() {
        for route in Route::ALL.into_iter().filter(|r| !r.is_public()) {
            let err = check(None, route).unwrap_err();
            assert_eq!(err, AccessError::Unauthenticated(route));
            assert_eq!(err.redirect(), Route::Login);
        }
    }

    #[test]
    fn test_worker_cannot_open_reports() {
        let worker = user(Role::EndOfficeWorker);
        assert!(matches!(
            check(Some(&worker), Route::Reports),
            Err(AccessError::Forbidden { role: Role::EndOfficeWorker, route: Route::Reports })
        ));
        assert!(require(Some(&worker), Route::Assignments).is_ok());
    }

    #[test]
    fn test_collector_cannot_manage_users() {
        let collector = user(Role::Collector);
        assert!(check(Some(&collector), Route::ManageUsers).is_err());
        assert!(check(Some(&collector), Route::CreateWork).is_ok());
        assert!(check(Some(&collector), Route::Assignments).is_err());
    }

    #[test]
    fn test_dept_head_routes() {
        assert_eq!(
            Route::accessible_by(Role::DeptHead),
            [Route::Dashboard, Route::CreateWork, Route::Reports, Route::ManageUsers]
        );
        assert_eq!(Route::accessible_by(Role::EndOfficeWorker), [Route::Assignments]);
    }

    #[test]
    fn test_landing_routes() {
        assert_eq!(landing_route(Role::Collector), Route::Dashboard);
        assert_eq!(landing_route(Role::DeptHead), Route::Dashboard);
        assert_eq!(landing_route(Role::EndOfficeWorker), Route::Assignments);
    }
}
