//! Inline outcome of a save action.

use leptos::prelude::*;

use crate::state::status::SaveStatus;

/// Renders nothing while idle, `saved_message` after a successful save, and
/// the error text after a failed one.
#[component]
pub fn SaveFeedback(#[prop(into)] status: Signal<SaveStatus>, saved_message: &'static str) -> impl IntoView {
    move || match status.get() {
        SaveStatus::Idle => ().into_any(),
        SaveStatus::Saved => view! { <p class="save-feedback save-feedback--ok">{saved_message}</p> }.into_any(),
        SaveStatus::Failed(message) => view! {
            <p class="save-feedback save-feedback--error" role="alert">
                "Not saved: "
                {message}
            </p>
        }
        .into_any(),
    }
}
