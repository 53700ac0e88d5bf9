//! Navigation menu entries per viewer.
//!
//! The menu is a derived view only; [`super::guard`] enforces access.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use super::table::{self, COMPLAINTS, DASHBOARD, FEES, NOTICES, REPORTS, ROOMS, STUDENTS, VISITORS};
use crate::state::session::{Session, Viewer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub path: &'static str,
    pub label: &'static str,
    /// CSS modifier selecting the entry's icon (`nav-icon--{icon}`).
    pub icon: &'static str,
}

const fn nav(path: &'static str, label: &'static str, icon: &'static str) -> NavEntry {
    NavEntry { path, label, icon }
}

pub const ADMIN_NAV: &[NavEntry] = &[
    nav(DASHBOARD, "Dashboard", "dashboard"),
    nav(STUDENTS, "Students", "users"),
    nav(ROOMS, "Rooms", "bed"),
    nav(FEES, "Fees", "card"),
    nav(VISITORS, "Visitors", "visitors"),
    nav(COMPLAINTS, "Complaints", "warning"),
    nav(NOTICES, "Notices", "bell"),
    nav(REPORTS, "Reports", "file"),
];

pub const STUDENT_NAV: &[NavEntry] = &[
    nav(NOTICES, "Notices", "bell"),
    nav(COMPLAINTS, "My Complaints", "warning"),
    nav(FEES, "My Fees", "card"),
];

/// Visible menu entries for the session's viewer.
#[must_use]
pub fn nav_entries(session: &Session) -> &'static [NavEntry] {
    match session.viewer() {
        Viewer::Admin => ADMIN_NAV,
        Viewer::Student => STUDENT_NAV,
        Viewer::Anonymous => &[],
    }
}

/// Target of the sidebar brand link.
#[must_use]
pub fn brand_path(session: &Session) -> &'static str {
    match session.viewer() {
        Viewer::Anonymous => table::LANDING,
        viewer => table::home_path(viewer),
    }
}

/// Screen title for `path` as labelled in the viewer's menu, falling back to
/// the admin label for screens the menu does not list.
#[must_use]
pub fn screen_title(session: &Session, path: &str) -> Option<&'static str> {
    let path = table::normalize(path);
    nav_entries(session)
        .iter()
        .chain(ADMIN_NAV)
        .find(|entry| entry.path == path)
        .map(|entry| entry.label)
        .or_else(|| (path == table::PROFILE).then_some("Profile"))
}

/// Whether a menu entry should be highlighted for the current path.
#[must_use]
pub fn is_active(entry: &NavEntry, current_path: &str) -> bool {
    table::normalize(current_path) == entry.path
}
