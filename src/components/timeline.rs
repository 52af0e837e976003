//! Dated event timeline, shared by the biography and career pages.

use dioxus::prelude::*;

/// One rendered timeline entry
#[derive(Clone, PartialEq)]
pub struct TimelineEvent {
    pub year: String,
    pub title: String,
    pub description: String,
    /// Optional small badge next to the title (e.g. "Personal")
    pub badge: Option<String>,
}

#[component]
pub fn EventTimeline(events: Vec<TimelineEvent>) -> Element {
    if events.is_empty() {
        return VNode::empty();
    }

    rsx! {
        div { class: "timeline",
            for (index, event) in events.iter().enumerate() {
                div {
                    key: "{index}-{event.year}",
                    class: "timeline-entry",

                    p { class: "timeline-year", "{event.year}" }
                    h3 { class: "timeline-title",
                        "{event.title}"
                        if let Some(badge) = &event.badge {
                            span { class: "timeline-category", "{badge}" }
                        }
                    }
                    p { class: "body-text", "{event.description}" }
                }
            }
        }
    }
}
