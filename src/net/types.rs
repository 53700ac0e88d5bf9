//! Wire DTOs for the GoTrue-compatible auth REST API.
//!
//! DESIGN
//! ======
//! Only the fields the client reads are modelled; everything else in the
//! service's payloads is ignored by serde.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Seconds before the real expiry at which an access token is treated as stale.
pub const EXPIRY_MARGIN_SECS: i64 = 30;

/// User record attached to an auth session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

/// Custom claims written at sign-up (`data` in the sign-up request).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Token pair plus user, as returned by the token endpoint and persisted in
/// `localStorage`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    /// Absolute expiry in seconds since the Unix epoch.
    #[serde(default)]
    pub expires_at: Option<i64>,
    /// Relative lifetime in seconds, as sent by the token endpoint.
    #[serde(default)]
    pub expires_in: Option<i64>,
    pub user: AuthUser,
}

impl AuthSession {
    /// Fill `expires_at` from `expires_in` when the service only sent the latter.
    #[must_use]
    pub fn with_expiry_from(mut self, now_secs: i64) -> Self {
        if self.expires_at.is_none() {
            self.expires_at = self.expires_in.map(|secs| now_secs.saturating_add(secs));
        }
        self
    }

    /// Whether the access token should be refreshed before use.
    #[must_use]
    pub fn is_expired_at(&self, now_secs: i64) -> bool {
        self.expires_at
            .is_some_and(|expires_at| expires_at <= now_secs.saturating_add(EXPIRY_MARGIN_SECS))
    }
}

/// Auth-state transitions broadcast to listeners.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthChange {
    SignedIn(AuthSession),
    SignedOut,
    TokenRefreshed(AuthSession),
}

#[derive(Debug, Serialize)]
pub struct PasswordGrant<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RefreshGrant<'a> {
    pub refresh_token: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SignUpRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub data: SignUpClaims<'a>,
}

#[derive(Debug, Serialize)]
pub struct SignUpClaims<'a> {
    pub full_name: &'a str,
    pub role: &'a str,
}

/// Error body shapes used by the auth service across versions.
#[derive(Debug, Default, Deserialize)]
pub struct AuthErrorBody {
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl AuthErrorBody {
    /// Most specific human-readable message present, if any.
    #[must_use]
    pub fn into_message(self) -> Option<String> {
        [self.error_description, self.msg, self.message, self.error]
            .into_iter()
            .flatten()
            .find(|text| !text.trim().is_empty())
    }
}
