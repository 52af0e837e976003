//! Submission detail modal.
//!
//! Mounted by the gallery only while a submission is selected, so local
//! state (the like toggle) starts fresh on every open. Dismissal paths:
//! Escape, a click on the overlay itself, or the close button - all three
//! end in the same closed state.

use dioxus::prelude::*;
use keanuverse_core::{FanSubmission, SubmissionType};

#[component]
pub fn SubmissionDetailModal(
    submission: FanSubmission,
    on_close: EventHandler<()>,
) -> Element {
    // Like toggle is local-only: bumps a counter for this open, no server
    // round-trip, discarded when the modal unmounts.
    let mut liked = use_signal(|| false);
    let base_likes = submission.likes;
    let shown_likes = if liked() { base_likes + 1 } else { base_likes };

    let badge_class = match submission.kind {
        SubmissionType::Art => "type-badge art",
        SubmissionType::Photo => "type-badge photo",
        SubmissionType::Video => "type-badge video",
        SubmissionType::Other => "type-badge other",
    };

    rsx! {
        div {
            class: "modal-overlay",
            tabindex: "0",
            autofocus: true,
            onkeydown: move |e| {
                if e.key() == Key::Escape {
                    on_close.call(());
                }
            },
            onclick: move |_| on_close.call(()),

            div {
                class: "modal",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    h2 { class: "modal-title", "{submission.title}" }
                    button {
                        class: "modal-close",
                        aria_label: "Close modal",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }

                div { class: "modal-body",
                    div { class: "modal-media", style: "position: relative;",
                        img {
                            src: "{submission.image_url}",
                            alt: "{submission.title}",
                        }
                        span { class: "{badge_class}", "{submission.kind.label()}" }
                    }

                    p { class: "body-text", style: "margin: 1rem 0;",
                        "{submission.description}"
                    }

                    div { class: "submission-card__meta",
                        div { class: "creator-chip",
                            div { class: "creator-avatar",
                                "{submission.creator.initial()}"
                            }
                            div {
                                div { "{submission.creator.name}" }
                                if let Some(country) = &submission.creator.country {
                                    div { style: "opacity: 0.7;", "{country}" }
                                }
                            }
                        }
                        span { "{submission.submitted_on()}" }
                    }

                    div { style: "display: flex; justify-content: space-between; align-items: center; margin-top: 1.25rem;",
                        button {
                            class: if liked() { "like-button liked" } else { "like-button" },
                            onclick: move |e| {
                                e.stop_propagation();
                                liked.set(!liked());
                            },
                            "♥ {shown_likes}"
                        }

                        if !submission.tags.is_empty() {
                            div {
                                for tag in submission.tags.iter() {
                                    span { key: "{tag}", class: "tag-chip", "#{tag}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
