//! Top navigation bar with route links and the theme toggle.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::ui::UiState;
use crate::util::{store::gateway, theme};

/// Links to every page plus a light/dark toggle on the right.
#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle = move |_| {
        let next = theme::toggle(ui.get_untracked().theme, &gateway());
        ui.update(|u| u.theme = next);
    };

    let toggle_label = move || if ui.get().theme.is_dark() { "Switch to light mode" } else { "Switch to dark mode" };
    let toggle_icon = move || if ui.get().theme.is_dark() { "\u{2600}" } else { "\u{263E}" };

    view! {
        <nav class="nav-bar">
            <A href="/">"Counter"</A>
            <A href="/form">"User Form"</A>
            <A href="/editor">"Editor"</A>
            <A href="/dashboard">"Dashboard"</A>
            <span class="nav-bar__spacer"></span>
            <button class="btn nav-bar__theme" on:click=on_toggle title=toggle_label aria-label=toggle_label>
                {toggle_icon}
            </button>
        </nav>
    }
}
