//! Auth service configuration baked in at build time.
//!
//! The WASM bundle has no process environment, so values come from
//! `option_env!` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_AUTH_URL: &str = "http://localhost:54321";
pub const AUTH_PATH_PREFIX: &str = "/auth/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Base URL of the hosted backend, without a trailing slash.
    pub url: String,
    /// Public (anon) API key sent with every auth request.
    pub anon_key: String,
}

impl AuthConfig {
    /// Build config from the compile-time environment.
    ///
    /// - `HOSTEL_AUTH_URL`: backend base URL, default `http://localhost:54321`
    /// - `HOSTEL_AUTH_ANON_KEY`: public API key, default empty
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("HOSTEL_AUTH_URL"), option_env!("HOSTEL_AUTH_ANON_KEY"))
    }

    #[must_use]
    pub fn from_values(url: Option<&str>, anon_key: Option<&str>) -> Self {
        let url = url
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_AUTH_URL)
            .trim_end_matches('/')
            .to_owned();
        let anon_key = anon_key.map(str::trim).unwrap_or_default().to_owned();
        Self { url, anon_key }
    }

    /// Absolute URL for an auth endpoint such as `token?grant_type=password`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{AUTH_PATH_PREFIX}/{}", self.url, path.trim_start_matches('/'))
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
