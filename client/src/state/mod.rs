//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the single piece of shared state; `auth` only describes how
//! the external sign-in flow plugs into the views.

pub mod auth;
pub mod session;
