//! Homepage - hero plus featured sections.

use dioxus::prelude::*;
use keanuverse_core::GalleryFilter;

use crate::app::Route;
use crate::components::gallery::SubmissionCard;
use crate::components::{NavHeader, NavLocation};
use crate::data::fan_submissions;

#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();

    // Featured strip reuses the shared gallery engine: popular-first,
    // then keep the featured entries
    let featured: Vec<_> = use_hook(|| {
        let filter = GalleryFilter {
            sort: keanuverse_core::SortBy::Popular,
            ..Default::default()
        };
        filter
            .apply(&fan_submissions())
            .into_iter()
            .filter(|s| s.featured)
            .take(3)
            .collect()
    });

    rsx! {
        div { class: "page",
            NavHeader { current: NavLocation::Home }

            section { class: "hero",
                span { class: "hero-eyebrow", "Actor • Musician • Philanthropist" }
                h1 { class: "hero-title", "Keanu Reeves" }
                p { class: "page-subtitle",
                    "Four decades of cinema, a bass guitar, a motorcycle company, and the \
                    internet's most documented kindness. Welcome to the official portfolio."
                }
                div { class: "hero-actions",
                    button {
                        class: "btn-primary",
                        onclick: move |_| { navigator.push(Route::Biography {}); },
                        "Read the Story"
                    }
                    button {
                        class: "btn-secondary",
                        onclick: move |_| { navigator.push(Route::GvipcApply {}); },
                        "Join the GVIPC"
                    }
                }
            }

            section { class: "container",
                div { class: "page-header",
                    h2 { class: "section-header", "Featured Fan Creations" }
                    p { class: "page-subtitle",
                        "The community's most loved submissions this season."
                    }
                }

                div { class: "gallery-grid",
                    for submission in featured.iter() {
                        SubmissionCard {
                            key: "{submission.id}",
                            submission: submission.clone(),
                            on_click: move |_| { navigator.push(Route::FanZone {}); },
                        }
                    }
                }
            }

            section { class: "container",
                div { class: "page-header",
                    h2 { class: "section-header", "Explore" }
                }
                div { class: "challenge-grid",
                    div {
                        class: "challenge-card",
                        onclick: move |_| { navigator.push(Route::Career {}); },
                        div { class: "challenge-card__icon", "🎬" }
                        h3 { class: "challenge-card__title", "Career Timeline" }
                        p { class: "body-text", "From Bill & Ted to the Baba Yaga, year by year." }
                    }
                    div {
                        class: "challenge-card",
                        onclick: move |_| { navigator.push(Route::Philanthropy {}); },
                        div { class: "challenge-card__icon", "🤝" }
                        h3 { class: "challenge-card__title", "Philanthropy" }
                        p { class: "body-text", "Decades of quiet giving, finally written down." }
                    }
                    div {
                        class: "challenge-card",
                        onclick: move |_| { navigator.push(Route::Journal {}); },
                        div { class: "challenge-card__icon", "📖" }
                        h3 { class: "challenge-card__title", "Journal" }
                        p { class: "body-text", "Wellness writing and personal stories from the community." }
                    }
                }
            }
        }
    }
}
