//! Auth client failure taxonomy.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors returned by [`crate::net::auth::AuthClient`] operations.
///
/// The `Display` output is what login and sign-up screens show to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl AuthError {
    /// True when the service rejected the credentials or token itself,
    /// as opposed to the request never completing.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Rejected { status: 400 | 401 | 403, .. })
    }
}
