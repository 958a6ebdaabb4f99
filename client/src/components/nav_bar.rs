//! Top bar with page links and the cursor readout.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::ui::UiState;

#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__title">"Line Mapper!"</span>
            <A href="/">"Edges"</A>
            <A href="/paths">"Campus Paths"</A>

            <span class="nav-bar__spacer"></span>

            <span class="nav-bar__cursor" title="Campus-grid coordinates under the pointer">
                {move || ui.with(UiState::cursor_label)}
            </span>
        </nav>
    }
}
