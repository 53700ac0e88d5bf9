//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage handles, document
//! attributes, clock) from page and component logic.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod clock;
pub mod theme;
