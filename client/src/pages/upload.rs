//! Receipt upload page. Sending the image to the backend happens elsewhere;
//! this view only lets the user pick a file.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use leptos::prelude::*;

/// Bare file name from a file input's value.
///
/// Browsers report `C:\fakepath\name.jpg` for file inputs; some report a
/// plain path. Either way only the last component is shown.
pub(crate) fn display_file_name(raw: &str) -> &str {
    raw.rsplit(['\\', '/']).next().unwrap_or(raw)
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let selected = RwSignal::new(String::new());

    view! {
        <div class="upload-page">
            <h1>"Upload a receipt"</h1>
            <input
                class="upload-page__input"
                type="file"
                accept="image/*"
                on:change=move |ev| selected.set(event_target_value(&ev))
            />
            <Show when=move || !selected.get().is_empty()>
                <p class="upload-page__selected">
                    "Selected: "
                    <span>{move || selected.with(|raw| display_file_name(raw).to_owned())}</span>
                </p>
            </Show>
        </div>
    }
}
