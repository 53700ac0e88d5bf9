//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and identity-aware components to decide redirects,
//! navigation entries, and role-specific rendering.
//!
//! DESIGN
//! ======
//! [`SessionStore`] is the only owner of the session. Anyone may read it; the
//! write path is private to this module and driven solely by
//! [`SessionResolver`], which translates auth-service answers and change
//! events into new snapshots.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::net::auth::AuthCollaborator;
use crate::net::error::AuthError;
use crate::net::types::{AuthChange, AuthSession};

/// Coarse role claim attached to an identity at sign-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Student,
}

impl Role {
    /// Interpret the `role` metadata claim. Anything other than `admin`
    /// (including a missing claim) is a student.
    #[must_use]
    pub fn from_claim(claim: Option<&str>) -> Self {
        match claim.map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("admin") => Self::Admin,
            _ => Self::Student,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Student => "student",
        }
    }
}

/// Role as seen by guard decisions, with "not signed in" made explicit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Viewer {
    Anonymous,
    Admin,
    Student,
}

/// Opaque reference to the signed-in principal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
}

/// Snapshot of the tab's auth state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub identity: Option<Identity>,
    pub role: Option<Role>,
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::pending()
    }
}

impl Session {
    /// State from app start until the initial lookup answers.
    #[must_use]
    pub fn pending() -> Self {
        Self { identity: None, role: None, loading: true }
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self { identity: None, role: None, loading: false }
    }

    #[must_use]
    pub fn from_auth(session: &AuthSession) -> Self {
        let user = &session.user;
        let metadata = &user.user_metadata;
        Self {
            identity: Some(Identity {
                id: user.id.clone(),
                email: user.email.clone(),
                name: metadata.full_name.clone(),
            }),
            role: Some(Role::from_claim(metadata.role.as_deref())),
            loading: false,
        }
    }

    /// Effective role: the role is ignored when no identity is present.
    #[must_use]
    pub fn viewer(&self) -> Viewer {
        match (&self.identity, self.role) {
            (None, _) => Viewer::Anonymous,
            (Some(_), Some(Role::Admin)) => Viewer::Admin,
            (Some(_), _) => Viewer::Student,
        }
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.viewer() == Viewer::Admin
    }

    /// Name to show in chrome: full name, then e-mail, then user id.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        let identity = self.identity.as_ref()?;
        identity
            .name
            .as_deref()
            .or(identity.email.as_deref())
            .or(Some(identity.id.as_str()))
    }
}

/// Fold the initial lookup answer into a session. Failures and "no session"
/// both become anonymous.
#[must_use]
pub fn resolve_lookup(lookup: &Result<Option<AuthSession>, AuthError>) -> Session {
    match lookup {
        Ok(Some(session)) => Session::from_auth(session),
        Ok(None) | Err(_) => Session::anonymous(),
    }
}

/// Session that follows an auth-change event.
#[must_use]
pub fn apply_change(change: &AuthChange) -> Session {
    match change {
        AuthChange::SignedIn(session) | AuthChange::TokenRefreshed(session) => Session::from_auth(session),
        AuthChange::SignedOut => Session::anonymous(),
    }
}

/// Single owned container for the tab's [`Session`].
#[derive(Clone, Debug)]
pub struct SessionStore {
    inner: ArcRwSignal<Session>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self { inner: ArcRwSignal::new(Session::pending()) }
    }

    /// Latest snapshot without subscribing the caller to changes.
    #[must_use]
    pub fn current(&self) -> Session {
        self.inner.get_untracked()
    }

    /// Latest snapshot, tracked by the surrounding reactive scope.
    #[must_use]
    pub fn get(&self) -> Session {
        self.inner.get()
    }

    fn publish(&self, session: Session) {
        self.inner.set(session);
    }
}

/// Drives [`SessionStore`] from an auth collaborator.
pub struct SessionResolver<C> {
    store: SessionStore,
    auth: C,
}

impl<C: AuthCollaborator> SessionResolver<C> {
    pub fn new(store: SessionStore, auth: C) -> Self {
        Self { store, auth }
    }

    /// Answer the initial lookup, then follow auth changes for the rest of
    /// the tab's life. Never fails: an unreachable service means anonymous.
    /// There is no timeout; the session stays pending until the lookup answers.
    pub async fn initialize(&self) {
        let lookup = self.auth.get_session().await;
        if let Err(e) = &lookup {
            log::warn!("session lookup failed, continuing anonymous: {e}");
        }
        let session = resolve_lookup(&lookup);
        log::debug!("session resolved: {:?}", session.viewer());
        self.store.publish(session);

        let store = self.store.clone();
        self.auth.on_auth_state_change(Rc::new(move |change| {
            store.publish(apply_change(change));
        }));
    }

    #[must_use]
    pub fn current_session(&self) -> Session {
        self.store.current()
    }
}

/// Reactive read-only view of the session provided by the root component.
pub fn use_session() -> Signal<Session> {
    let store = expect_context::<SessionStore>();
    Signal::derive(move || store.get())
}
