//! Personal-stories timeline with expandable cards.

use dioxus::prelude::*;
use keanuverse_core::TimelineStory;

use crate::components::Prose;

#[component]
pub fn StoryTimeline(stories: Vec<TimelineStory>) -> Element {
    // Which story is expanded to its full markdown body
    let mut expanded: Signal<Option<String>> = use_signal(|| None);

    rsx! {
        div { class: "timeline",
            for story in stories.iter() {
                {
                    let id = story.id.clone();
                    let is_open = expanded.read().as_deref() == Some(id.as_str());
                    let initial = story.author.name.chars().next().unwrap_or('?');
                    rsx! {
                        div {
                            key: "{story.id}",
                            class: "timeline-entry",

                            p { class: "timeline-year", "{story.shared_on()}" }

                            div { class: "story-card",
                                h3 { class: "timeline-title", "{story.title}" }

                                div { class: "story-card__byline",
                                    div { class: "creator-avatar", "{initial}" }
                                    span { "{story.author.name}" }
                                }

                                if is_open {
                                    div { class: "story-card__content",
                                        Prose { content: story.content.clone() }
                                    }

                                    if let Some(audio_url) = &story.audio_url {
                                        audio { controls: true, src: "{audio_url}" }
                                    }

                                    if !story.tags.is_empty() {
                                        div { style: "margin-top: 0.75rem;",
                                            for tag in story.tags.iter() {
                                                span { key: "{tag}", class: "tag-chip", "#{tag}" }
                                            }
                                        }
                                    }
                                } else {
                                    p { class: "body-text", "{story.summary}" }
                                }

                                button {
                                    class: "btn-ghost",
                                    style: "margin-top: 0.75rem;",
                                    onclick: move |_| {
                                        if is_open {
                                            expanded.set(None);
                                        } else {
                                            expanded.set(Some(id.clone()));
                                        }
                                    },
                                    if is_open { "Show less" } else { "Read full story" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
