use super::*;
use crate::routing::table::{DASHBOARD, FEES, ROUTES, SIGNUP};
use crate::state::session::{Identity, Role};

fn signed_in(id: &str, role: Role) -> Session {
    Session {
        identity: Some(Identity { id: id.to_owned(), email: None, name: None }),
        role: Some(role),
        loading: false,
    }
}

fn paths_with(access: Access) -> impl Iterator<Item = &'static str> {
    ROUTES.iter().filter(move |r| r.access == access).map(|r| r.path)
}

// =============================================================
// Properties over the route table
// =============================================================

#[test]
fn anonymous_reaches_only_public_paths() {
    let session = Session::anonymous();
    for route in ROUTES {
        let expected = if route.access == Access::Public {
            Decision::Allow
        } else {
            Decision::Redirect(LOGIN)
        };
        assert_eq!(decide(&session, route.path), expected, "path {}", route.path);
    }
}

#[test]
fn admin_reaches_every_private_path() {
    let session = signed_in("u2", Role::Admin);
    for path in paths_with(Access::Admin).chain(paths_with(Access::AnyRole)) {
        assert_eq!(decide(&session, path), Decision::Allow, "path {path}");
    }
}

#[test]
fn admin_on_public_path_goes_to_dashboard() {
    let session = signed_in("u2", Role::Admin);
    for path in paths_with(Access::Public) {
        assert_eq!(decide(&session, path), Decision::Redirect(DASHBOARD), "path {path}");
    }
}

#[test]
fn student_on_admin_path_goes_to_notices_never_login() {
    let session = signed_in("u1", Role::Student);
    for path in paths_with(Access::Admin) {
        assert_eq!(decide(&session, path), Decision::Redirect(NOTICES), "path {path}");
    }
}

#[test]
fn student_reaches_role_agnostic_paths() {
    let session = signed_in("u1", Role::Student);
    for path in paths_with(Access::AnyRole) {
        assert_eq!(decide(&session, path), Decision::Allow, "path {path}");
    }
}

#[test]
fn student_on_public_path_goes_to_notices() {
    let session = signed_in("u1", Role::Student);
    for path in paths_with(Access::Public) {
        assert_eq!(decide(&session, path), Decision::Redirect(NOTICES), "path {path}");
    }
}

#[test]
fn loading_never_redirects() {
    let mut sessions = vec![Session::pending()];
    for role in [Role::Admin, Role::Student] {
        let mut session = signed_in("u1", role);
        session.loading = true;
        sessions.push(session);
    }
    for session in &sessions {
        for route in ROUTES {
            assert_eq!(decide(session, route.path), Decision::Pending);
        }
        assert_eq!(decide(session, "/does-not-exist"), Decision::Pending);
    }
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn anonymous_students_redirects_to_login() {
    assert_eq!(decide(&Session::anonymous(), "/students"), Decision::Redirect("/login"));
}

#[test]
fn student_rooms_redirects_to_notices() {
    let session = signed_in("u1", Role::Student);
    assert_eq!(decide(&session, "/rooms"), Decision::Redirect("/notices"));
}

#[test]
fn admin_landing_redirects_to_dashboard() {
    let session = signed_in("u2", Role::Admin);
    assert_eq!(decide(&session, "/"), Decision::Redirect("/admin/dashboard"));
}

#[test]
fn student_fees_is_allowed() {
    let session = signed_in("u1", Role::Student);
    assert_eq!(decide(&session, FEES), Decision::Allow);
}

// =============================================================
// Edge cases
// =============================================================

#[test]
fn unknown_path_goes_to_landing() {
    assert_eq!(decide(&Session::anonymous(), "/nowhere"), Decision::Redirect(LANDING));
    let session = signed_in("u2", Role::Admin);
    assert_eq!(decide(&session, "/nowhere"), Decision::Redirect(LANDING));
}

#[test]
fn trailing_slash_and_query_are_ignored() {
    let session = signed_in("u1", Role::Student);
    assert_eq!(decide(&session, "/rooms/"), Decision::Redirect(NOTICES));
    assert_eq!(decide(&session, "/fees?status=unpaid"), Decision::Allow);
    assert_eq!(decide(&Session::anonymous(), "/signup/"), Decision::Allow);
    assert_eq!(decide(&Session::anonymous(), SIGNUP), Decision::Allow);
}

#[test]
fn role_without_identity_is_anonymous() {
    let session = Session { identity: None, role: Some(Role::Admin), loading: false };
    assert_eq!(decide(&session, DASHBOARD), Decision::Redirect(LOGIN));
}
