//! Registration page (`new` route), reachable only while logged out.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::state::auth::{Registration, looks_like_email, use_auth_handlers};

pub(crate) const MIN_PASSWORD_LEN: usize = 8;

pub(crate) const MISSING_FIELDS: &str = "Fill in every field.";
pub(crate) const BAD_EMAIL: &str = "Enter a valid email address.";
pub(crate) const SHORT_PASSWORD: &str = "Password must be at least 8 characters.";
pub(crate) const PASSWORD_MISMATCH: &str = "Passwords do not match.";
pub(crate) const REGISTRATION_UNAVAILABLE: &str = "Registration is not configured.";

pub(crate) fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<Registration, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() || confirm.is_empty() {
        return Err(MISSING_FIELDS);
    }
    if !looks_like_email(email) {
        return Err(BAD_EMAIL);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(SHORT_PASSWORD);
    }
    if password != confirm {
        return Err(PASSWORD_MISMATCH);
    }
    Ok(Registration {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let handlers = use_auth_handlers();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let result = validate_registration(&name.get(), &email.get(), &password.get(), &confirm.get());
        match result {
            Ok(registration) => match handlers {
                Some(handlers) => {
                    info.set("Creating account...".to_owned());
                    handlers.register.run(registration);
                }
                None => info.set(REGISTRATION_UNAVAILABLE.to_owned()),
            },
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <div class="register-page">
            <h1>"Create an account"</h1>
            <form class="register-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Confirm password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    "Register"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="register-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
