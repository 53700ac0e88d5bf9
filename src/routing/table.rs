//! Static route declarations.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use crate::state::session::Viewer;

pub const LANDING: &str = "/";
pub const LOGIN: &str = "/login";
pub const SIGNUP: &str = "/signup";
pub const DASHBOARD: &str = "/admin/dashboard";
pub const STUDENTS: &str = "/students";
pub const ROOMS: &str = "/rooms";
pub const FEES: &str = "/fees";
pub const VISITORS: &str = "/visitors";
pub const COMPLAINTS: &str = "/complaints";
pub const NOTICES: &str = "/notices";
pub const REPORTS: &str = "/reports";
pub const PROFILE: &str = "/profile";

/// Who may open a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Landing and auth screens; signed-in users are sent home instead.
    Public,
    /// Any signed-in role.
    AnyRole,
    Admin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub access: Access,
}

const fn entry(path: &'static str, access: Access) -> RouteEntry {
    RouteEntry { path, access }
}

pub const ROUTES: &[RouteEntry] = &[
    entry(LANDING, Access::Public),
    entry(LOGIN, Access::Public),
    entry(SIGNUP, Access::Public),
    entry(DASHBOARD, Access::Admin),
    entry(STUDENTS, Access::Admin),
    entry(ROOMS, Access::Admin),
    entry(VISITORS, Access::Admin),
    entry(REPORTS, Access::Admin),
    entry(FEES, Access::AnyRole),
    entry(COMPLAINTS, Access::AnyRole),
    entry(NOTICES, Access::AnyRole),
    entry(PROFILE, Access::AnyRole),
];

/// Strip query, fragment, and a trailing slash (except for the root).
#[must_use]
pub fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { LANDING } else { trimmed }
}

#[must_use]
pub fn lookup(path: &str) -> Option<&'static RouteEntry> {
    let path = normalize(path);
    ROUTES.iter().find(|route| route.path == path)
}

/// Default landing path for a viewer.
#[must_use]
pub fn home_path(viewer: Viewer) -> &'static str {
    match viewer {
        Viewer::Admin => DASHBOARD,
        Viewer::Student => NOTICES,
        Viewer::Anonymous => LOGIN,
    }
}
