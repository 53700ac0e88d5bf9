//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Public pages (`landing`, `login`, `signup`) render standalone; every other
//! page renders inside `AppLayout` and only after the route gate allowed it.

pub mod complaints;
pub mod dashboard;
pub mod fees;
pub mod landing;
pub mod login;
pub mod notices;
pub mod profile;
pub mod reports;
pub mod rooms;
pub mod signup;
pub mod students;
pub mod visitors;
