//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns a single `RwSignal<Session>` and provides it through context.
//! The external sign-in flow writes it; route guards and user-aware views read
//! it. Nothing persists it across page loads.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Identity of the signed-in user as returned by credential verification.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Backend user id. The verification endpoint names this `user_id`.
    #[serde(alias = "user_id")]
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Whether the user may open admin routes. Stored as `0`/`1` server-side;
    /// accounts created without the column set come back as `null`.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub admin: bool,
}

/// Authentication state: a logged-in flag plus the active profile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub logged_in: bool,
    pub user: UserProfile,
}

impl Session {
    /// A logged-in session for `user`.
    #[must_use]
    pub fn signed_in(user: UserProfile) -> Self {
        Self { logged_in: true, user }
    }

    /// Replace the profile wholesale and mark the session logged in.
    pub fn sign_in(&mut self, user: UserProfile) {
        log::info!("session: signed in user {} (admin={})", user.id, user.admin);
        *self = Self::signed_in(user);
    }

    /// Return to the logged-out, empty-profile state.
    pub fn sign_out(&mut self) {
        if self.logged_in {
            log::info!("session: signed out user {}", self.user.id);
        }
        *self = Self::default();
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.logged_in && self.user.admin
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(false),
        serde_json::Value::Bool(flag) => Ok(flag),
        serde_json::Value::Number(number) => match number.as_i64() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(D::Error::custom(format!("expected 0 or 1, got {number}"))),
        },
        _ => Err(D::Error::custom("expected boolean or 0/1 flag")),
    }
}
