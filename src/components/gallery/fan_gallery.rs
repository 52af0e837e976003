//! The fan gallery: search, type filter, sort toggle, and grid.
//!
//! Filtering recomputes synchronously on every keystroke and click; the
//! actual predicate/sort logic lives in `keanuverse_core::gallery` and is
//! shared with every other surface that lists submissions.

use dioxus::prelude::*;
use keanuverse_core::{FanSubmission, GalleryFilter, SortBy, SubmissionType, TypeFilter};

use super::SubmissionCard;
use super::SubmissionDetailModal;

#[component]
pub fn FanGallery(submissions: Vec<FanSubmission>) -> Element {
    let mut filter = use_signal(GalleryFilter::default);
    let mut selected: Signal<Option<FanSubmission>> = use_signal(|| None);

    let view = filter.read().apply(&submissions);
    let shown = view.len();
    let noun = if shown == 1 { "submission" } else { "submissions" };

    let type_chips = [
        (TypeFilter::All, "All Submissions"),
        (TypeFilter::Only(SubmissionType::Art), "Artwork"),
        (TypeFilter::Only(SubmissionType::Photo), "Photos"),
        (TypeFilter::Only(SubmissionType::Video), "Videos"),
        (TypeFilter::Only(SubmissionType::Other), "Other"),
    ];

    rsx! {
        div {
            // Search
            div { class: "gallery-search",
                input {
                    class: "form-input",
                    r#type: "text",
                    value: "{filter.read().query}",
                    placeholder: "Search submissions...",
                    oninput: move |e| filter.write().query = e.value(),
                }
                if !filter.read().query.is_empty() {
                    button {
                        class: "search-clear",
                        onclick: move |_| filter.write().query.clear(),
                        "✕"
                    }
                }
            }

            // Type filters
            div { class: "filter-row",
                for (kind, label) in type_chips {
                    button {
                        key: "{label}",
                        class: if filter.read().kind == kind { "filter-chip active" } else { "filter-chip" },
                        onclick: move |_| filter.write().kind = kind,
                        "{label}"
                    }
                }
            }

            // Sort options
            div { class: "sort-toggle",
                button {
                    class: if filter.read().sort == SortBy::Newest { "active" } else { "" },
                    onclick: move |_| filter.write().sort = SortBy::Newest,
                    "Newest"
                }
                button {
                    class: if filter.read().sort == SortBy::Popular { "active" } else { "" },
                    onclick: move |_| filter.write().sort = SortBy::Popular,
                    "Most Popular"
                }
            }

            div { class: "results-count", "Showing {shown} {noun}" }

            if view.is_empty() {
                div { class: "empty-state",
                    h3 { class: "section-header", "No submissions found" }
                    p { "Try adjusting your filters or search query" }
                }
            } else {
                div { class: "gallery-grid",
                    for submission in view.iter() {
                        SubmissionCard {
                            key: "{submission.id}",
                            submission: submission.clone(),
                            on_click: move |s| selected.set(Some(s)),
                        }
                    }
                }
            }

            // Detail modal - mounted only while a submission is selected,
            // so its like state resets on each open
            if let Some(submission) = selected() {
                SubmissionDetailModal {
                    key: "{submission.id}",
                    submission: submission.clone(),
                    on_close: move |_| selected.set(None),
                }
            }
        }
    }
}
