//! Admin landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::RouteName;
use crate::state::session::Session;

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let email = move || session.with(|s| s.user.email.clone());

    view! {
        <div class="admin-page">
            <h1>"Administration"</h1>
            <p>"Signed in as " {email}</p>
            <A href=RouteName::AdminDash.path()>"Open dashboard"</A>
        </div>
    }
}
