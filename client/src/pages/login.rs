//! Login page collecting email + password for the external sign-in flow.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routes::RouteName;
use crate::state::auth::{Credentials, looks_like_email, use_auth_handlers};
use crate::state::session::Session;
use crate::util::auth::redirect_options;

pub(crate) const MISSING_FIELDS: &str = "Enter both email and password.";
pub(crate) const BAD_EMAIL: &str = "Enter a valid email address.";
pub(crate) const SIGN_IN_UNAVAILABLE: &str = "Sign-in is not configured.";

/// Trim and check the login form fields.
///
/// The password is not trimmed; whitespace may be part of it.
pub(crate) fn validate_login(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    if !looks_like_email(email) {
        return Err(BAD_EMAIL);
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let handlers = use_auth_handlers();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    // Leave the page once the external flow has signed the user in.
    Effect::new(move || {
        if session.with(|s| s.logged_in) {
            navigate(RouteName::Home.path(), redirect_options());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_login(&email.get(), &password.get()) {
            Ok(credentials) => match handlers {
                Some(handlers) => {
                    info.set("Signing in...".to_owned());
                    handlers.sign_in.run(credentials);
                }
                None => info.set(SIGN_IN_UNAVAILABLE.to_owned()),
            },
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"SmartShelf"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <a href=RouteName::New.path() class="login-card__register">
                    "Create an account"
                </a>
            </div>
        </div>
    }
}
