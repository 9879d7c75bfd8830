//! Receipt detail page, addressed by the `?id=` query parameter.

#[cfg(test)]
#[path = "receipt_test.rs"]
mod receipt_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

/// Heading for the receipt view. Blank ids count as missing.
pub(crate) fn receipt_heading(id: Option<&str>) -> String {
    match id.map(str::trim) {
        Some(id) if !id.is_empty() => format!("Receipt {id}"),
        _ => "No receipt selected".to_owned(),
    }
}

#[component]
pub fn ReceiptPage() -> impl IntoView {
    let query = use_query_map();
    let heading = move || query.with(|q| receipt_heading(q.get_str("id")));

    view! {
        <div class="receipt-page">
            <h1>{heading}</h1>
        </div>
    }
}
