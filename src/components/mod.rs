//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Layout chrome (`app_layout`, `sidebar`, `topbar`) wraps authenticated
//! screens; `route_gate` applies the navigation guard around all routes.

pub mod app_layout;
pub mod page_header;
pub mod route_gate;
pub mod sidebar;
pub mod topbar;
