//! Career page - milestone timeline.

use dioxus::prelude::*;

use crate::components::{EventTimeline, NavHeader, NavLocation, TimelineEvent};
use crate::data::career_milestones;

#[component]
pub fn Career() -> Element {
    let events: Vec<TimelineEvent> = career_milestones()
        .iter()
        .map(|m| TimelineEvent {
            year: m.year.to_string(),
            title: m.title.to_string(),
            description: m.description.to_string(),
            badge: None,
        })
        .collect();

    rsx! {
        div { class: "page",
            NavHeader { current: NavLocation::Career }

            div { class: "container",
                div { class: "page-header",
                    h1 { class: "page-title", "Career" }
                    p { class: "page-subtitle",
                        "Selected milestones from four decades on screen."
                    }
                }

                EventTimeline { events }
            }
        }
    }
}
