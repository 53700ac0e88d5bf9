//! Client for the hosted auth service plus the auth-change listener registry.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, session persisted
//! in `localStorage`.
//! Server-side (SSR): no stored session; mutating calls return
//! [`AuthError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `Result<_, AuthError>`. The session resolver folds
//! lookup failures into the anonymous state; login and sign-up screens show
//! the error's display text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;
use std::rc::Rc;

use super::error::AuthError;
use super::types::{AuthChange, AuthSession, SignUpClaims, SignUpRequest};
#[cfg(feature = "hydrate")]
use super::types::{AuthErrorBody, AuthUser, PasswordGrant, RefreshGrant};
use crate::config::AuthConfig;
#[cfg(feature = "hydrate")]
use super::persist;
#[cfg(feature = "hydrate")]
use crate::util::clock;

/// Role claim written for every self-registered account.
pub const SIGN_UP_ROLE: &str = "student";

/// Callback invoked for every auth-state change.
pub type AuthListener = Rc<dyn Fn(&AuthChange)>;

/// The operations the session resolver needs from an auth backend.
#[allow(async_fn_in_trait)]
pub trait AuthCollaborator {
    /// Current session, if one exists and is still usable.
    async fn get_session(&self) -> Result<Option<AuthSession>, AuthError>;

    /// Register `listener` for all future auth-state changes.
    fn on_auth_state_change(&self, listener: AuthListener);

    async fn sign_out(&self) -> Result<(), AuthError>;
}

thread_local! {
    static LISTENERS: RefCell<Vec<AuthListener>> = const { RefCell::new(Vec::new()) };
}

fn subscribe(listener: AuthListener) {
    LISTENERS.with(|listeners| listeners.borrow_mut().push(listener));
}

/// Deliver `change` to every registered listener.
///
/// The registry is snapshotted first so a listener may subscribe again
/// without re-borrowing.
#[cfg(any(test, feature = "hydrate"))]
fn emit(change: &AuthChange) {
    let snapshot: Vec<AuthListener> = LISTENERS.with(|listeners| listeners.borrow().clone());
    log::debug!("auth change: {}", change_name(change));
    for listener in snapshot {
        listener(change);
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn change_name(change: &AuthChange) -> &'static str {
    match change {
        AuthChange::SignedIn(_) => "signed_in",
        AuthChange::SignedOut => "signed_out",
        AuthChange::TokenRefreshed(_) => "token_refreshed",
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn password_grant_path() -> &'static str {
    "token?grant_type=password"
}

#[cfg(any(test, feature = "hydrate"))]
fn refresh_grant_path() -> &'static str {
    "token?grant_type=refresh_token"
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(access_token: &str) -> String {
    format!("Bearer {access_token}")
}

/// Build the sign-up payload. Self-registration always yields a student.
fn sign_up_request<'a>(full_name: &'a str, email: &'a str, password: &'a str) -> SignUpRequest<'a> {
    SignUpRequest {
        email,
        password,
        data: SignUpClaims { full_name, role: SIGN_UP_ROLE },
    }
}

/// REST client for the GoTrue-compatible auth endpoints.
#[derive(Clone, Debug)]
pub struct AuthClient {
    config: AuthConfig,
}

impl AuthClient {
    #[must_use]
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Sign in with email and password, persist the session, and emit
    /// [`AuthChange::SignedIn`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the credentials are rejected.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(password_grant_path());
            let session = self
                .post_for_session(&url, &PasswordGrant { email, password })
                .await?;
            persist::save(&session);
            emit(&AuthChange::SignedIn(session.clone()));
            Ok(session)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(AuthError::Unavailable)
        }
    }

    /// Register a new student account. The service may require e-mail
    /// confirmation before the account can sign in, so no session is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service rejects the sign-up.
    pub async fn sign_up(&self, full_name: &str, email: &str, password: &str) -> Result<(), AuthError> {
        let payload = sign_up_request(full_name, email, password);
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint("signup");
            let resp = gloo_net::http::Request::post(&url)
                .header("apikey", &self.config.anon_key)
                .json(&payload)
                .map_err(|e| AuthError::Decode(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(rejection(resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(AuthError::Unavailable)
        }
    }

    /// Sign out: revoke the token (best effort), clear the stored session, and emit
    /// [`AuthChange::SignedOut`].
    ///
    /// # Errors
    ///
    /// Only fails outside the browser; a failed revoke is logged and ignored
    /// because the local session is discarded either way.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            if let Some(session) = persist::load() {
                let url = self.config.endpoint("logout");
                let revoked = gloo_net::http::Request::post(&url)
                    .header("apikey", &self.config.anon_key)
                    .header("Authorization", &bearer(&session.access_token))
                    .send()
                    .await;
                if let Err(e) = revoked {
                    log::warn!("token revoke failed: {e}");
                }
            }
            persist::clear();
            emit(&AuthChange::SignedOut);
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(AuthError::Unavailable)
        }
    }

    /// Resolve the persisted session.
    ///
    /// An expired access token is exchanged for a new one (emitting
    /// [`AuthChange::TokenRefreshed`]); otherwise the user record is re-read so
    /// role changes made on the backend are picked up. A session the service
    /// no longer accepts is discarded and reported as `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot be reached.
    pub async fn get_session(&self) -> Result<Option<AuthSession>, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let Some(stored) = persist::load() else {
                return Ok(None);
            };

            if stored.is_expired_at(clock::now_secs()) {
                return match self.refresh_session(&stored.refresh_token).await {
                    Ok(refreshed) => {
                        persist::save(&refreshed);
                        emit(&AuthChange::TokenRefreshed(refreshed.clone()));
                        Ok(Some(refreshed))
                    }
                    Err(e) if e.is_unauthorized() => {
                        persist::clear();
                        Ok(None)
                    }
                    Err(e) => Err(e),
                };
            }

            match self.fetch_user(&stored.access_token).await {
                Ok(user) => {
                    let session = AuthSession { user, ..stored };
                    persist::save(&session);
                    Ok(Some(session))
                }
                Err(e) if e.is_unauthorized() => {
                    persist::clear();
                    Ok(None)
                }
                Err(e) => Err(e),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(None)
        }
    }

    #[cfg(feature = "hydrate")]
    async fn refresh_session(&self, refresh_token: &str) -> Result<AuthSession, AuthError> {
        let url = self.config.endpoint(refresh_grant_path());
        self.post_for_session(&url, &RefreshGrant { refresh_token }).await
    }

    #[cfg(feature = "hydrate")]
    async fn fetch_user(&self, access_token: &str) -> Result<AuthUser, AuthError> {
        let url = self.config.endpoint("user");
        let resp = gloo_net::http::Request::get(&url)
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &bearer(access_token))
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        resp.json::<AuthUser>()
            .await
            .map_err(|e| AuthError::Decode(e.to_string()))
    }

    #[cfg(feature = "hydrate")]
    async fn post_for_session<T: serde::Serialize>(&self, url: &str, body: &T) -> Result<AuthSession, AuthError> {
        let resp = gloo_net::http::Request::post(url)
            .header("apikey", &self.config.anon_key)
            .json(body)
            .map_err(|e| AuthError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        let session = resp
            .json::<AuthSession>()
            .await
            .map_err(|e| AuthError::Decode(e.to_string()))?;
        Ok(session.with_expiry_from(clock::now_secs()))
    }
}

#[cfg(feature = "hydrate")]
async fn rejection(resp: gloo_net::http::Response) -> AuthError {
    let status = resp.status();
    let message = resp
        .json::<AuthErrorBody>()
        .await
        .ok()
        .and_then(AuthErrorBody::into_message)
        .unwrap_or_else(|| request_failed_message(status));
    AuthError::Rejected { status, message }
}

impl AuthCollaborator for AuthClient {
    async fn get_session(&self) -> Result<Option<AuthSession>, AuthError> {
        AuthClient::get_session(self).await
    }

    fn on_auth_state_change(&self, listener: AuthListener) {
        subscribe(listener);
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        AuthClient::sign_out(self).await
    }
}
