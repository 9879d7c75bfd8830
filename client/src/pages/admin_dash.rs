//! Admin dashboard. Signup statistics are rendered by an external widget.

use leptos::prelude::*;

#[component]
pub fn AdminDashPage() -> impl IntoView {
    view! {
        <div class="admin-dash-page">
            <h1>"Dashboard"</h1>
            <div class="admin-dash-page__stats" id="signup-stats"></div>
        </div>
    }
}
