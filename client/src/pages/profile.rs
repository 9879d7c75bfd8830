//! Profile page showing the signed-in user's identity.

use leptos::prelude::*;

use crate::state::session::Session;

/// Role label shown on the profile card.
pub fn role_label(admin: bool) -> &'static str {
    if admin { "Administrator" } else { "Member" }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let name = move || session.with(|s| s.user.name.clone());
    let email = move || session.with(|s| s.user.email.clone());
    let role = move || session.with(|s| role_label(s.is_admin()));

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            <dl class="profile-page__fields">
                <dt>"Name"</dt>
                <dd>{name}</dd>
                <dt>"Email"</dt>
                <dd>{email}</dd>
                <dt>"Role"</dt>
                <dd>{role}</dd>
            </dl>
            <button class="btn" on:click=move |_| session.update(Session::sign_out)>
                "Sign out"
            </button>
        </div>
    }
}
