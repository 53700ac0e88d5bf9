//! Networking modules for the hosted auth service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` wraps the REST endpoints and the auth-change listener registry,
//! `persist` keeps the session across page loads, `types` defines the wire
//! schema, and `error` the failure taxonomy.

pub mod auth;
pub mod error;
pub mod persist;
pub mod types;
