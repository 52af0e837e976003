//! Debounced search bar for the journal grid.
//!
//! The input updates immediately; `on_search` fires only after 300 ms of
//! quiet. A generation counter drops stale timers, so fast typing emits
//! one search, not one per keystroke.

use std::time::Duration;

use dioxus::prelude::*;
use keanuverse_core::SEARCH_DEBOUNCE_MS;

#[component]
pub fn SearchBar(
    on_search: EventHandler<String>,
    #[props(default = "Search articles...".to_string())] placeholder: String,
) -> Element {
    let mut query = use_signal(String::new);
    let mut generation = use_signal(|| 0u64);

    let handle_input = move |e: Event<FormData>| {
        let value = e.value();
        query.set(value.clone());

        let this_generation = generation() + 1;
        generation.set(this_generation);

        spawn(async move {
            tokio::time::sleep(Duration::from_millis(SEARCH_DEBOUNCE_MS)).await;
            if generation() == this_generation {
                on_search.call(value);
            }
        });
    };

    let handle_clear = move |_| {
        query.set(String::new());
        generation.set(generation() + 1);
        on_search.call(String::new());
    };

    rsx! {
        div { class: "gallery-search",
            input {
                class: "form-input",
                r#type: "text",
                value: "{query}",
                placeholder: "{placeholder}",
                oninput: handle_input,
            }
            if !query.read().is_empty() {
                button { class: "search-clear", onclick: handle_clear, "✕" }
            }
        }
    }
}
