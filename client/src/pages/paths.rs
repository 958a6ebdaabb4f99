//! Campus-paths page: pick two buildings and draw the route between them.
//!
//! SYSTEM CONTEXT
//! ==============
//! Buildings and routes come from the external routing service through
//! `net::api`. Failures are logged and shown as a banner; the page keeps
//! whatever route it drew last.

use leptos::prelude::*;

use crate::components::{building_select::BuildingSelect, map_view::MapView, notice::Notice};
use crate::state::paths::PathsState;

#[component]
pub fn PathsPage() -> impl IntoView {
    let paths = expect_context::<RwSignal<PathsState>>();

    #[cfg(feature = "csr")]
    {
        if paths.with_untracked(|p| p.buildings.is_empty()) {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_buildings().await {
                    Ok(buildings) => paths.update(|p| p.set_buildings(buildings)),
                    Err(e) => {
                        log::warn!("building list request failed: {e}");
                        paths.update(|p| p.set_error(&e));
                    }
                }
            });
        }
    }

    let buildings = Signal::derive(move || {
        paths.with(|p| {
            p.buildings
                .entries()
                .into_iter()
                .map(|(short, long)| (short.to_owned(), long.to_owned()))
                .collect::<Vec<_>>()
        })
    });
    let start = Signal::derive(move || paths.with(|p| p.start.clone()));
    let end = Signal::derive(move || paths.with(|p| p.end.clone()));
    let route = Memo::new(move |_| paths.with(|p| p.path.clone()));
    let error = Signal::derive(move || paths.with(|p| p.error.clone()));

    let on_directions = move |_| {
        let Some((from, to)) = paths.try_update(PathsState::begin_request).flatten() else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_path(&from, &to).await;
                if let Err(e) = &result {
                    log::warn!("path request {from} -> {to} failed: {e}");
                }
                paths.update(|p| p.finish_request(result));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (from, to);
            paths.update(|p| p.finish_request(Err(crate::net::api::ApiError::Unavailable)));
        }
    };

    let summary = move || paths.with(|p| p.summary.clone().unwrap_or_default());

    view! {
        <div class="paths-page">
            <MapView segments=route/>
            <aside class="paths-page__panel">
                <BuildingSelect
                    label="Start:"
                    buildings=buildings
                    value=start
                    on_change=Callback::new(move |code: String| paths.update(|p| p.select_start(code)))
                />
                <BuildingSelect
                    label="End:"
                    buildings=buildings
                    value=end
                    on_change=Callback::new(move |code: String| paths.update(|p| p.select_end(code)))
                />
                <div class="paths-page__actions">
                    <button
                        class="btn"
                        on:click=on_directions
                        disabled=move || paths.with(|p| p.loading)
                    >
                        "Directions"
                    </button>
                    <button class="btn" on:click=move |_| paths.update(PathsState::reset)>"Clear"</button>
                </div>
                <Notice message=error/>
                <p class="paths-page__summary">{summary}</p>
            </aside>
        </div>
    }
}
