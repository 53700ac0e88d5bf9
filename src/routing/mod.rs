//! Role-aware routing: the declared route table, the navigation guard, and
//! the per-role navigation menu.
//!
//! ARCHITECTURE
//! ============
//! Everything here is a pure function of a [`crate::state::session::Session`]
//! snapshot and a path, so rules are testable without rendering. The
//! `RouteGate` component applies the guard on every navigation; the sidebar
//! only renders the menu and never gates access on its own.

pub mod guard;
pub mod nav;
pub mod table;
