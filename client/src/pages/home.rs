//! Landing page for signed-in users.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::RouteName;
use crate::state::session::Session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let name = move || session.with(|s| s.user.name.clone());

    view! {
        <div class="home-page">
            <h1>"Welcome back, " {name}</h1>
            <p>
                <A href=RouteName::Upload.path()>"Upload a receipt"</A>
                " or browse your "
                <A href=RouteName::Receipt.path()>"receipts"</A>
                "."
            </p>
        </div>
    }
}
