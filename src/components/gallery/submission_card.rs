//! One tile in the gallery grid.

use dioxus::prelude::*;
use keanuverse_core::{FanSubmission, SubmissionType};

#[component]
pub fn SubmissionCard(
    submission: FanSubmission,
    on_click: EventHandler<FanSubmission>,
) -> Element {
    let clicked = submission.clone();
    let badge_class = match submission.kind {
        SubmissionType::Art => "type-badge art",
        SubmissionType::Photo => "type-badge photo",
        SubmissionType::Video => "type-badge video",
        SubmissionType::Other => "type-badge other",
    };

    rsx! {
        div {
            class: "submission-card",
            onclick: move |_| on_click.call(clicked.clone()),

            div { class: "submission-card__media",
                img {
                    src: "{submission.display_image()}",
                    alt: "{submission.title}",
                }

                if submission.kind == SubmissionType::Video {
                    div { class: "submission-card__play", "▶" }
                }

                span { class: "{badge_class}", "{submission.kind.label()}" }

                if submission.featured {
                    span { class: "featured-badge", "Featured" }
                }
            }

            div { class: "submission-card__body",
                h3 { class: "submission-card__title", "{submission.title}" }
                div { class: "submission-card__meta",
                    div { class: "creator-chip",
                        div { class: "creator-avatar",
                            if let Some(avatar) = &submission.creator.avatar {
                                img { src: "{avatar}", alt: "{submission.creator.name}" }
                            } else {
                                "{submission.creator.initial()}"
                            }
                        }
                        span { "{submission.creator.name}" }
                    }
                    span { "♥ {submission.likes}" }
                }
            }
        }
    }
}
