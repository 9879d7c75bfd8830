//! Leptos wiring that applies guard decisions to the router.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed view goes through the same redirect behavior, so the effect
//! lives here instead of being repeated per page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::guard::{self, Decision};
use crate::routes::RouteName;
use crate::state::session::Session;

/// Options used when the guard replaces a navigation. The rejected entry is
/// replaced so the back button does not bounce through it again.
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Path to navigate to for `decision`, or `None` when the view may render.
pub fn redirect_path(decision: Decision) -> Option<&'static str> {
    decision.redirect_target().map(RouteName::path)
}

/// Re-evaluate the guard for `route` whenever the session changes and
/// navigate away when it answers with a redirect.
pub fn install_route_guard<F>(session: RwSignal<Session>, route: RouteName, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let decision = session.with(|s| guard::evaluate(s, route));
        if let Some(path) = redirect_path(decision) {
            log::debug!("guard: {route} -> {path} ({decision:?})");
            navigate(path, redirect_options());
        }
    });
}
