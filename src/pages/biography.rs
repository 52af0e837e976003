//! Biography page - life story in sections, each with its own timeline.

use dioxus::prelude::*;

use crate::components::{EventTimeline, NavHeader, NavLocation, Prose, TimelineEvent};
use crate::data::biography_sections;

#[component]
pub fn Biography() -> Element {
    rsx! {
        div { class: "page",
            NavHeader { current: NavLocation::Biography }

            div { class: "container",
                div { class: "page-header",
                    h1 { class: "page-title", "Biography" }
                    p { class: "page-subtitle",
                        "Born in Beirut, raised in Toronto, adopted by the whole internet."
                    }
                }

                for section in biography_sections() {
                    section {
                        key: "{section.id}",
                        id: "{section.id}",
                        style: "margin-bottom: 4rem;",

                        h2 { class: "section-header",
                            "{section.title}"
                            span { class: "timeline-category", "{section.period}" }
                        }

                        Prose { content: section.content.to_string() }

                        EventTimeline {
                            events: section.events.iter().map(|event| TimelineEvent {
                                year: event.year.to_string(),
                                title: event.title.to_string(),
                                description: event.description.to_string(),
                                badge: Some(event.category.label().to_string()),
                            }).collect::<Vec<_>>(),
                        }
                    }
                }
            }
        }
    }
}
