//! Loading spinner scoped to one page section.

use leptos::prelude::*;

/// Spinner with a caption, shown while a section's fetch is in flight.
#[component]
pub fn Spinner(label: &'static str) -> impl IntoView {
    view! {
        <div class="spinner">
            <div class="spinner__ring"></div>
            <div class="spinner__label">{label}</div>
        </div>
    }
}
