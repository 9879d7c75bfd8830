//! Navigation guard: decides whether a navigation proceeds or is redirected.
//!
//! SYSTEM CONTEXT
//! ==============
//! Called before a routed view renders. The decision reads only the session's
//! logged-in flag, its admin flag, and the target route, so it can be tested
//! without a router or a browser.
//!
//! POLICY
//! ======
//! First match wins:
//! 1. Logged out, target not public or guest-only: go to `login`.
//! 2. Logged in, target guest-only (`new`): go to `home`.
//! 3. Logged in without the admin flag, target admin-only: go to `home`.
//! 4. Otherwise allow.
//!
//! Every redirect target is itself allowed under the same session, so applying
//! a redirect never triggers a second one.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::{Access, RouteName};
use crate::state::session::Session;

/// Outcome of a guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect(RouteName),
}

impl Decision {
    #[must_use]
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }

    #[must_use]
    pub fn redirect_target(self) -> Option<RouteName> {
        match self {
            Self::Allow => None,
            Self::Redirect(target) => Some(target),
        }
    }
}

/// Decide access for a required access level.
#[must_use]
pub fn decide(access: Access, session: &Session) -> Decision {
    match (access, session.logged_in) {
        (Access::Public, _) | (Access::GuestOnly, false) | (Access::Member, true) => Decision::Allow,
        (Access::Member | Access::Admin, false) => Decision::Redirect(RouteName::Login),
        (Access::GuestOnly, true) => Decision::Redirect(RouteName::Home),
        (Access::Admin, true) => {
            if session.is_admin() {
                Decision::Allow
            } else {
                Decision::Redirect(RouteName::Home)
            }
        }
    }
}

/// Decide access for navigating to `target`.
#[must_use]
pub fn evaluate(session: &Session, target: RouteName) -> Decision {
    decide(target.access(), session)
}

/// Decide access for a symbolic route name. Unknown names are left to the
/// router's fallback and always allowed.
#[must_use]
pub fn evaluate_name(session: &Session, target: &str) -> Decision {
    target
        .parse::<RouteName>()
        .map_or(Decision::Allow, |route| evaluate(session, route))
}
