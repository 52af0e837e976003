//! Fan Zone - the gallery page.

use dioxus::prelude::*;

use crate::components::gallery::{FanGallery, SubmissionFormModal};
use crate::components::{NavHeader, NavLocation};
use crate::data::fan_submissions;

#[component]
pub fn FanZone() -> Element {
    let mut show_form = use_signal(|| false);

    // Seed ids are minted per mount; hold one copy so grid keys stay stable
    let submissions = use_hook(fan_submissions);

    rsx! {
        div { class: "page",
            NavHeader { current: NavLocation::FanZone }

            div { class: "container",
                div { class: "page-header",
                    span { class: "hero-eyebrow", "Community • Creativity • Connection" }
                    h1 { class: "page-title", "Fan Art Gallery" }
                    p { class: "page-subtitle",
                        "Explore amazing fan creations from our talented community. Share your \
                        own artwork, photos, and videos to celebrate Keanu's iconic roles and moments."
                    }
                    button {
                        class: "btn-primary",
                        style: "margin-top: 1.5rem;",
                        onclick: move |_| show_form.set(true),
                        "Submit Your Fan Art"
                    }
                }

                FanGallery { submissions: submissions.clone() }
            }

            SubmissionFormModal {
                show: show_form(),
                on_close: move |_| show_form.set(false),
            }
        }
    }
}
