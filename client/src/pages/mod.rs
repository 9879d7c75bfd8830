//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! One module per route in `routes::ROUTES`. Pages assume the guard already
//! ran; they never check access themselves.

pub mod admin;
pub mod admin_dash;
pub mod home;
pub mod login;
pub mod profile;
pub mod receipt;
pub mod register;
pub mod upload;
