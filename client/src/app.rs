//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guarded::Guarded;
use crate::components::nav_bar::NavBar;
use crate::pages::{
    admin::AdminPage, admin_dash::AdminDashPage, home::HomePage, login::LoginPage, profile::ProfilePage,
    receipt::ReceiptPage, register::RegisterPage, upload::UploadPage,
};
use crate::routes::RouteName;
use crate::state::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session signal and sets up client-side routing. Every route view
/// is wrapped in `Guarded`; paths here must match `routes::ROUTES`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/smartshelf.css"/>
        <Title text="SmartShelf"/>

        <Router>
            <NavBar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <Guarded route=RouteName::Home><HomePage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <Guarded route=RouteName::Login><LoginPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("upload")
                        view=|| view! { <Guarded route=RouteName::Upload><UploadPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("new")
                        view=|| view! { <Guarded route=RouteName::New><RegisterPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("receipt")
                        view=|| view! { <Guarded route=RouteName::Receipt><ReceiptPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <Guarded route=RouteName::Profile><ProfilePage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <Guarded route=RouteName::Admin><AdminPage/></Guarded> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("dash"))
                        view=|| view! { <Guarded route=RouteName::AdminDash><AdminDashPage/></Guarded> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
