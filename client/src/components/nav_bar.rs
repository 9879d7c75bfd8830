//! Top navigation bar listing the routes the current session may open.
//!
//! DESIGN
//! ======
//! Link visibility is derived from the same guard that protects the routes, so
//! the bar never offers a link that would immediately bounce.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::guard;
use crate::routes::{ROUTES, RouteName};
use crate::state::session::Session;

/// Human-readable label for a route link.
pub fn link_label(route: RouteName) -> &'static str {
    match route {
        RouteName::Home => "Home",
        RouteName::Login => "Sign in",
        RouteName::Upload => "Upload",
        RouteName::New => "Register",
        RouteName::Receipt => "Receipts",
        RouteName::Profile => "Profile",
        RouteName::Admin => "Admin",
        RouteName::AdminDash => "Dashboard",
    }
}

/// Routes to show for `session`, in table order.
///
/// Signed-in users do not see the sign-in entry even though the guard lets
/// them open it.
pub fn visible_links(session: &Session) -> Vec<RouteName> {
    ROUTES
        .iter()
        .map(|def| def.name)
        .filter(|&name| !(session.logged_in && name == RouteName::Login))
        .filter(|&name| guard::evaluate(session, name).is_allowed())
        .collect()
}

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let location = use_location();
    let current = move || location.pathname.with(|path| RouteName::from_path(path));

    // The guard on the current view reacts to the cleared session and moves
    // the user to the sign-in route.
    let on_sign_out = move |_| session.update(Session::sign_out);

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"SmartShelf"</span>
            <ul class="nav-bar__links">
                {move || {
                    session
                        .with(visible_links)
                        .into_iter()
                        .map(|route| {
                            view! {
                                <li class=("nav-bar__link--active", move || current() == Some(route))>
                                    <A href=route.path()>{link_label(route)}</A>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            <Show when=move || session.with(|s| s.logged_in)>
                <button class="btn nav-bar__sign-out" on:click=on_sign_out>
                    "Sign out"
                </button>
            </Show>
        </nav>
    }
}
