//! Edge-list editor: the textarea plus Draw and Clear.
//!
//! Typing only updates the buffer. Draw runs the parser over the whole
//! buffer; a rejected draw empties the map and pops a blocking alert with
//! the failure.

use leptos::prelude::*;

use crate::state::lines::LinesState;

#[component]
pub fn EdgeList() -> impl IntoView {
    let lines = expect_context::<RwSignal<LinesState>>();

    let on_draw = move |_| {
        let Some(Err(failure)) = lines.try_update(LinesState::draw) else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            log::warn!("draw rejected: {failure}");
            alert(&failure.to_string());
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = failure;
        }
    };

    view! {
        <div class="edge-list">
            <label class="edge-list__label" for="edge-list-text">"Edges"</label>
            <textarea
                id="edge-list-text"
                class="edge-list__text"
                rows="5"
                cols="30"
                placeholder=edges::EDGE_FORM
                prop:value=move || lines.with(|s| s.text().to_owned())
                on:input=move |ev| lines.update(|s| s.edit(event_target_value(&ev)))
            ></textarea>
            <div class="edge-list__actions">
                <button class="btn" on:click=on_draw>"Draw"</button>
                <button class="btn" on:click=move |_| lines.update(LinesState::clear)>"Clear"</button>
            </div>
        </div>
    }
}

#[cfg(feature = "csr")]
fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::warn!("alert failed: {e:?}");
    }
}
