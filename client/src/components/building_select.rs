//! Labeled dropdown of campus buildings.

use leptos::prelude::*;

/// `buildings` holds `(short, long)` pairs in display order; the option
/// value is the short code and the visible text is the long name.
#[component]
pub fn BuildingSelect(
    label: &'static str,
    #[prop(into)] buildings: Signal<Vec<(String, String)>>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="building-select">
            <span class="building-select__label">{label}</span>
            <select
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <For
                    each=move || buildings.get()
                    key=|(short, _)| short.clone()
                    children=move |(short, long)| {
                        let selected = {
                            let short = short.clone();
                            move || value.with(|v| *v == short)
                        };
                        view! { <option value=short selected=selected>{long}</option> }
                    }
                />
            </select>
        </label>
    }
}
