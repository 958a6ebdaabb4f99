//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{lines::LinesPage, paths::PathsPage};
use crate::state::{lines::LinesState, paths::PathsState, ui::UiState};

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing. The
/// line-mapper and campus-paths states live side by side so switching pages
/// keeps what each one last drew.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let lines = RwSignal::new(LinesState::default());
    let paths = RwSignal::new(PathsState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(lines);
    provide_context(paths);
    provide_context(ui);

    view! {
        <Title text="Line Mapper!"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LinesPage/>
                    <Route path=StaticSegment("paths") view=PathsPage/>
                </Routes>
            </main>
        </Router>
    }
}
