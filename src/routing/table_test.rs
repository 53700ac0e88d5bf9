use super::*;

#[test]
fn normalize_strips_trailing_slash_query_and_fragment() {
    assert_eq!(normalize("/students/"), "/students");
    assert_eq!(normalize("/fees?page=2"), "/fees");
    assert_eq!(normalize("/notices#latest"), "/notices");
    assert_eq!(normalize("/admin/dashboard/?tab=1"), "/admin/dashboard");
}

#[test]
fn normalize_keeps_root() {
    assert_eq!(normalize("/"), "/");
    assert_eq!(normalize(""), "/");
    assert_eq!(normalize("/?ref=mail"), "/");
}

#[test]
fn lookup_finds_declared_routes() {
    assert_eq!(lookup("/rooms").map(|r| r.access), Some(Access::Admin));
    assert_eq!(lookup("/fees/").map(|r| r.access), Some(Access::AnyRole));
    assert_eq!(lookup("/signup").map(|r| r.access), Some(Access::Public));
}

#[test]
fn lookup_rejects_unknown_paths() {
    assert!(lookup("/nope").is_none());
    assert!(lookup("/admin").is_none());
    assert!(lookup("/students/42").is_none());
}

#[test]
fn route_paths_are_unique() {
    for (i, a) in ROUTES.iter().enumerate() {
        for b in &ROUTES[i + 1..] {
            assert_ne!(a.path, b.path);
        }
    }
}

#[test]
fn public_routes_are_landing_login_signup() {
    let public: Vec<&str> = ROUTES
        .iter()
        .filter(|r| r.access == Access::Public)
        .map(|r| r.path)
        .collect();
    assert_eq!(public, vec![LANDING, LOGIN, SIGNUP]);
}

#[test]
fn home_paths_per_viewer() {
    assert_eq!(home_path(Viewer::Admin), "/admin/dashboard");
    assert_eq!(home_path(Viewer::Student), "/notices");
    assert_eq!(home_path(Viewer::Anonymous), "/login");
}
