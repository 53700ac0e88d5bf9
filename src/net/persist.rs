//! The signed-in [`AuthSession`] as kept across page loads.
//!
//! Only the auth client reads or writes this slot. A value that no longer
//! decodes (older schema, manual edits) is treated as "no session" and
//! dropped on the next write or clear.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use super::types::AuthSession;

/// `localStorage` key holding the serialized session.
pub const SESSION_STORAGE_KEY: &str = "hostel.auth.session";

#[cfg(any(test, feature = "hydrate"))]
fn decode(raw: &str) -> Option<AuthSession> {
    match serde_json::from_str(raw) {
        Ok(session) => Some(session),
        Err(e) => {
            log::warn!("ignoring unreadable stored session: {e}");
            None
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn encode(session: &AuthSession) -> Option<String> {
    serde_json::to_string(session).ok()
}

/// Stored session, if any.
#[cfg(feature = "hydrate")]
pub fn load() -> Option<AuthSession> {
    let raw = crate::util::browser::local_storage()?
        .get_item(SESSION_STORAGE_KEY)
        .ok()
        .flatten()?;
    decode(&raw)
}

/// Replace the stored session.
#[cfg(feature = "hydrate")]
pub fn save(session: &AuthSession) {
    let (Some(storage), Some(raw)) = (crate::util::browser::local_storage(), encode(session)) else {
        log::warn!("session not persisted: storage unavailable");
        return;
    };
    if let Err(e) = storage.set_item(SESSION_STORAGE_KEY, &raw) {
        log::warn!("session not persisted: {e:?}");
    }
}

#[cfg(feature = "hydrate")]
pub fn clear() {
    if let Some(storage) = crate::util::browser::local_storage() {
        let _ = storage.remove_item(SESSION_STORAGE_KEY);
    }
}
