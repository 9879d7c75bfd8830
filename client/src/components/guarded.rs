//! Route wrapper that renders its view only when the guard allows it.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::guard;
use crate::routes::RouteName;
use crate::state::session::Session;
use crate::util::auth::install_route_guard;

/// Guards `children` behind the access level of `route`.
///
/// On a redirect decision nothing renders and the router moves to the
/// redirect target, replacing the rejected history entry.
#[component]
pub fn Guarded(route: RouteName, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    install_route_guard(session, route, use_navigate());

    let allowed = move || session.with(|s| guard::evaluate(s, route).is_allowed());

    view! {
        <Show when=allowed fallback=|| ()>
            {children()}
        </Show>
    }
}
