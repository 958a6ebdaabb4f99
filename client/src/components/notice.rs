//! Inline banner for the latest failure on a page.

use leptos::prelude::*;

/// Shows `message` while it is `Some`.
#[component]
pub fn Notice(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class="notice" role="alert">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
