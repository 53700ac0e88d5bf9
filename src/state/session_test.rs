use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::net::auth::AuthListener;
use crate::net::types::{AuthUser, UserMetadata};

fn auth_session(id: &str, role: Option<&str>) -> AuthSession {
    AuthSession {
        access_token: format!("at-{id}"),
        refresh_token: format!("rt-{id}"),
        expires_at: None,
        expires_in: Some(3600),
        user: AuthUser {
            id: id.to_owned(),
            email: Some(format!("{id}@example.com")),
            user_metadata: UserMetadata {
                full_name: Some(format!("User {id}")),
                role: role.map(str::to_owned),
            },
        },
    }
}

struct FakeAuth {
    lookup: Result<Option<AuthSession>, AuthError>,
    listeners: RefCell<Vec<AuthListener>>,
}

impl FakeAuth {
    fn answering(lookup: Result<Option<AuthSession>, AuthError>) -> Rc<Self> {
        Rc::new(Self { lookup, listeners: RefCell::new(Vec::new()) })
    }

    fn emit(&self, change: &AuthChange) {
        for listener in self.listeners.borrow().iter() {
            listener(change);
        }
    }
}

impl AuthCollaborator for Rc<FakeAuth> {
    async fn get_session(&self) -> Result<Option<AuthSession>, AuthError> {
        self.lookup.clone()
    }

    fn on_auth_state_change(&self, listener: AuthListener) {
        self.listeners.borrow_mut().push(listener);
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.emit(&AuthChange::SignedOut);
        Ok(())
    }
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_from_admin_claim() {
    assert_eq!(Role::from_claim(Some("admin")), Role::Admin);
    assert_eq!(Role::from_claim(Some(" Admin ")), Role::Admin);
}

#[test]
fn role_defaults_to_student() {
    assert_eq!(Role::from_claim(Some("student")), Role::Student);
    assert_eq!(Role::from_claim(Some("warden")), Role::Student);
    assert_eq!(Role::from_claim(None), Role::Student);
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_default_is_loading_and_anonymous() {
    let session = Session::default();
    assert!(session.loading);
    assert!(session.identity.is_none());
    assert_eq!(session.viewer(), Viewer::Anonymous);
}

#[test]
fn session_from_auth_carries_identity_and_role() {
    let session = Session::from_auth(&auth_session("u2", Some("admin")));
    assert!(!session.loading);
    assert_eq!(session.role, Some(Role::Admin));
    assert!(session.is_admin());
    let identity = session.identity.unwrap();
    assert_eq!(identity.id, "u2");
    assert_eq!(identity.email.as_deref(), Some("u2@example.com"));
    assert_eq!(identity.name.as_deref(), Some("User u2"));
}

#[test]
fn role_is_ignored_without_identity() {
    let session = Session { identity: None, role: Some(Role::Admin), loading: false };
    assert_eq!(session.viewer(), Viewer::Anonymous);
    assert!(!session.is_admin());
}

#[test]
fn identity_without_role_is_student() {
    let mut session = Session::from_auth(&auth_session("u1", None));
    session.role = None;
    assert_eq!(session.viewer(), Viewer::Student);
}

#[test]
fn display_name_falls_back_to_email_then_id() {
    let mut session = Session::from_auth(&auth_session("u1", Some("student")));
    assert_eq!(session.display_name(), Some("User u1"));
    if let Some(identity) = session.identity.as_mut() {
        identity.name = None;
    }
    assert_eq!(session.display_name(), Some("u1@example.com"));
    if let Some(identity) = session.identity.as_mut() {
        identity.email = None;
    }
    assert_eq!(session.display_name(), Some("u1"));
    assert_eq!(Session::anonymous().display_name(), None);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn failed_lookup_is_anonymous_not_loading() {
    let session = resolve_lookup(&Err(AuthError::Network("offline".to_owned())));
    assert_eq!(session, Session::anonymous());
}

#[test]
fn empty_lookup_is_anonymous() {
    assert_eq!(resolve_lookup(&Ok(None)), Session::anonymous());
}

#[test]
fn sign_out_change_clears_identity() {
    assert_eq!(apply_change(&AuthChange::SignedOut), Session::anonymous());
}

#[test]
fn token_refresh_keeps_identity() {
    let session = apply_change(&AuthChange::TokenRefreshed(auth_session("u1", Some("student"))));
    assert_eq!(session.identity.map(|i| i.id).as_deref(), Some("u1"));
    assert_eq!(session.role, Some(Role::Student));
}

// =============================================================
// SessionResolver
// =============================================================

#[test]
fn store_starts_pending() {
    let store = SessionStore::new();
    assert_eq!(store.current(), Session::pending());
}

#[test]
fn initialize_publishes_existing_session() {
    let store = SessionStore::new();
    let auth = FakeAuth::answering(Ok(Some(auth_session("u2", Some("admin")))));
    let resolver = SessionResolver::new(store.clone(), auth);
    block_on(resolver.initialize());
    assert!(store.current().is_admin());
    assert_eq!(resolver.current_session(), store.current());
}

#[test]
fn initialize_absorbs_lookup_failure() {
    let store = SessionStore::new();
    let auth = FakeAuth::answering(Err(AuthError::Network("unreachable".to_owned())));
    let resolver = SessionResolver::new(store.clone(), auth);
    block_on(resolver.initialize());
    assert_eq!(store.current(), Session::anonymous());
}

#[test]
fn initialize_follows_later_auth_changes() {
    let store = SessionStore::new();
    let auth = FakeAuth::answering(Ok(None));
    let resolver = SessionResolver::new(store.clone(), auth.clone());
    block_on(resolver.initialize());
    assert_eq!(store.current(), Session::anonymous());

    auth.emit(&AuthChange::SignedIn(auth_session("u1", Some("student"))));
    assert_eq!(store.current().viewer(), Viewer::Student);

    block_on(auth.sign_out()).unwrap();
    assert_eq!(store.current(), Session::anonymous());
}

#[test]
fn no_subscription_before_lookup_answers() {
    let auth = FakeAuth::answering(Ok(None));
    let _resolver = SessionResolver::new(SessionStore::new(), auth.clone());
    assert!(auth.listeners.borrow().is_empty());
}
