//! Category and mood filter chips for the journal grid.

use dioxus::prelude::*;
use keanuverse_core::{Category, Mood};

#[component]
pub fn CategoryFilter(
    selected: Option<Category>,
    on_select: EventHandler<Option<Category>>,
) -> Element {
    rsx! {
        div { class: "filter-row",
            button {
                class: if selected.is_none() { "filter-chip active" } else { "filter-chip" },
                onclick: move |_| on_select.call(None),
                "All Topics"
            }
            for category in Category::ALL {
                button {
                    key: "{category.label()}",
                    class: if selected == Some(category) { "filter-chip active" } else { "filter-chip" },
                    onclick: move |_| on_select.call(Some(category)),
                    "{category.label()}"
                }
            }
        }
    }
}

#[component]
pub fn MoodFilter(selected: Option<Mood>, on_select: EventHandler<Option<Mood>>) -> Element {
    rsx! {
        div { class: "filter-row",
            button {
                class: if selected.is_none() { "filter-chip active" } else { "filter-chip" },
                onclick: move |_| on_select.call(None),
                "Any Mood"
            }
            for mood in Mood::ALL {
                button {
                    key: "{mood.label()}",
                    class: if selected == Some(mood) { "filter-chip active" } else { "filter-chip" },
                    onclick: move |_| on_select.call(Some(mood)),
                    "{mood.label()}"
                }
            }
        }
    }
}
