//! Hand-off points to the external authentication flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login and registration views only collect and validate input. Whatever
//! embeds `App` may provide `AuthHandlers` through context; the handlers talk
//! to the backend and write the session signal on success.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

/// Validated login form input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Validated registration form input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Callbacks supplied by the embedding application.
#[derive(Clone, Copy)]
pub struct AuthHandlers {
    pub sign_in: Callback<Credentials>,
    pub register: Callback<Registration>,
}

/// Handlers from context, if the embedding application installed any.
pub fn use_auth_handlers() -> Option<AuthHandlers> {
    use_context::<AuthHandlers>()
}

/// Shared shape check for email fields.
pub(crate) fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
