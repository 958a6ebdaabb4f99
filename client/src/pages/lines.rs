//! Line-mapper page: type edges, draw them on the campus map.

use edges::Segment;
use leptos::prelude::*;

use crate::components::{edge_list::EdgeList, map_view::MapView, notice::Notice};
use crate::state::lines::LinesState;

#[component]
pub fn LinesPage() -> impl IntoView {
    let lines = expect_context::<RwSignal<LinesState>>();

    let committed = Memo::new(move |_| lines.with(|s| s.segments().to_vec()));
    let notice = Signal::derive(move || lines.with(|s| s.notice.clone()));
    let count = move || committed.with(Vec::<Segment>::len);

    view! {
        <div class="lines-page">
            <MapView segments=committed/>
            <aside class="lines-page__panel">
                <EdgeList/>
                <Notice message=notice/>
                <p class="lines-page__count">{move || format!("{} segments drawn", count())}</p>
            </aside>
        </div>
    }
}
