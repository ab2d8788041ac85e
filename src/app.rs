//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::config::app_config;
use crate::pages::{counter::CounterPage, dashboard::DashboardPage, editor::EditorPage, profile::ProfilePage};
use crate::state::ui::UiState;
use crate::util::{store::gateway, theme};

/// Root application component.
///
/// Probes storage, applies the stored theme, provides the shared UI state,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::startup(&gateway(), app_config().default_theme));
    theme::apply(ui.get_untracked().theme);
    provide_context(ui);

    // One blocking notice per session when storage cannot be used.
    Effect::new(move || {
        if let Some(notice) = ui.try_update(UiState::take_storage_notice).flatten() {
            show_blocking_notice(notice);
        }
    });

    view! {
        <Title text="Widget Deck"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=CounterPage/>
                    <Route path=StaticSegment("form") view=ProfilePage/>
                    <Route path=StaticSegment("editor") view=EditorPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                </Routes>
            </main>
        </Router>
    }
}

fn show_blocking_notice(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::warn!("{message}");
    }
}
