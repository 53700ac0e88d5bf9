use super::*;
use crate::routing::guard::{Decision, decide};
use crate::routing::table::PROFILE;
use crate::state::session::{Identity, Role};

fn signed_in(role: Role) -> Session {
    Session {
        identity: Some(Identity { id: "u1".to_owned(), email: None, name: None }),
        role: Some(role),
        loading: false,
    }
}

#[test]
fn admin_sees_full_menu() {
    let paths: Vec<&str> = nav_entries(&signed_in(Role::Admin)).iter().map(|e| e.path).collect();
    assert_eq!(
        paths,
        vec![DASHBOARD, STUDENTS, ROOMS, FEES, VISITORS, COMPLAINTS, NOTICES, REPORTS]
    );
}

#[test]
fn student_sees_reduced_menu() {
    let labels: Vec<&str> = nav_entries(&signed_in(Role::Student)).iter().map(|e| e.label).collect();
    assert_eq!(labels, vec!["Notices", "My Complaints", "My Fees"]);
}

#[test]
fn anonymous_sees_no_menu() {
    assert!(nav_entries(&Session::anonymous()).is_empty());
    assert!(nav_entries(&Session::pending()).is_empty());
}

#[test]
fn every_menu_entry_passes_the_guard() {
    for role in [Role::Admin, Role::Student] {
        let session = signed_in(role);
        for entry in nav_entries(&session) {
            assert_eq!(decide(&session, entry.path), Decision::Allow, "{role:?} {}", entry.path);
        }
    }
}

#[test]
fn brand_points_at_default_landing() {
    assert_eq!(brand_path(&signed_in(Role::Admin)), DASHBOARD);
    assert_eq!(brand_path(&signed_in(Role::Student)), NOTICES);
    assert_eq!(brand_path(&Session::anonymous()), "/");
}

#[test]
fn screen_title_uses_role_labels() {
    assert_eq!(screen_title(&signed_in(Role::Student), FEES), Some("My Fees"));
    assert_eq!(screen_title(&signed_in(Role::Admin), FEES), Some("Fees"));
    assert_eq!(screen_title(&signed_in(Role::Admin), "/rooms/"), Some("Rooms"));
    assert_eq!(screen_title(&signed_in(Role::Student), PROFILE), Some("Profile"));
    assert_eq!(screen_title(&signed_in(Role::Student), "/login"), None);
}

#[test]
fn active_entry_matches_normalized_path() {
    let entry = STUDENT_NAV[0];
    assert!(is_active(&entry, "/notices/"));
    assert!(is_active(&entry, "/notices?page=3"));
    assert!(!is_active(&entry, "/fees"));
}
