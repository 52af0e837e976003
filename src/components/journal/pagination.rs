//! Page-number strip for the journal grid.

use dioxus::prelude::*;
use keanuverse_core::{page_numbers, PageEntry};

#[component]
pub fn Pagination(current: usize, total: usize, on_change: EventHandler<usize>) -> Element {
    if total <= 1 {
        return VNode::empty();
    }

    let entries = page_numbers(current, total);

    rsx! {
        nav { class: "pagination", aria_label: "Pagination",
            button {
                class: "page-btn",
                disabled: current == 1,
                aria_label: "Go to previous page",
                onclick: move |_| {
                    if current > 1 {
                        on_change.call(current - 1);
                    }
                },
                "‹"
            }

            for (index, entry) in entries.into_iter().enumerate() {
                {
                    match entry {
                        PageEntry::Page(page) => rsx! {
                            button {
                                key: "page-{index}",
                                class: if page == current { "page-btn current" } else { "page-btn" },
                                onclick: move |_| on_change.call(page),
                                "{page}"
                            }
                        },
                        PageEntry::Ellipsis => rsx! {
                            span { key: "page-{index}", class: "page-ellipsis", "..." }
                        },
                    }
                }
            }

            button {
                class: "page-btn",
                disabled: current == total,
                aria_label: "Go to next page",
                onclick: move |_| {
                    if current < total {
                        on_change.call(current + 1);
                    }
                },
                "›"
            }
        }
    }
}
