//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `ui`) so components depend on small
//! focused models.

pub mod session;
pub mod ui;
