//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared session from Leptos context; route views are
//! wrapped in `Guarded` so access checks stay out of the pages themselves.

pub mod guarded;
pub mod nav_bar;
