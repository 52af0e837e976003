//! Journal page - wellness grid with facet filters, debounced search,
//! pagination, and the personal-stories timeline.

use dioxus::prelude::*;
use keanuverse_core::{page_slice, total_pages, BlogFilter, Category, Mood, PAGE_SIZE};

use crate::components::journal::{
    BlogCard, CategoryFilter, MoodFilter, Pagination, SearchBar, StoryForm, StoryTimeline,
};
use crate::components::{NavHeader, NavLocation};
use crate::data::{journal_posts, timeline_stories};

#[component]
pub fn Journal() -> Element {
    let mut category: Signal<Option<Category>> = use_signal(|| None);
    let mut mood: Signal<Option<Mood>> = use_signal(|| None);
    let mut query = use_signal(String::new);
    let mut page = use_signal(|| 1usize);

    let filter = BlogFilter {
        category: category(),
        mood: mood(),
        query: query(),
    };
    let view = filter.apply(&journal_posts());
    let pages = total_pages(view.len(), PAGE_SIZE);
    let visible = page_slice(&view, page(), PAGE_SIZE).to_vec();
    let shown = view.len();
    let noun = if shown == 1 { "article" } else { "articles" };

    rsx! {
        div { class: "page",
            NavHeader { current: NavLocation::Journal }

            div { class: "container",
                div { class: "page-header",
                    h1 { class: "page-title", "The Journal" }
                    p { class: "page-subtitle",
                        "Wellness writing inspired by a famously calm person, plus stories \
                        from the community about what helped."
                    }
                }

                SearchBar {
                    on_search: move |q| {
                        query.set(q);
                        page.set(1);
                    },
                }

                CategoryFilter {
                    selected: category(),
                    on_select: move |c| {
                        category.set(c);
                        page.set(1);
                    },
                }

                MoodFilter {
                    selected: mood(),
                    on_select: move |m| {
                        mood.set(m);
                        page.set(1);
                    },
                }

                div { class: "results-count", "{shown} {noun}" }

                if visible.is_empty() {
                    div { class: "empty-state",
                        h3 { class: "section-header", "Nothing matches" }
                        p { "Try a different search or clear the filters" }
                    }
                } else {
                    div { class: "journal-grid",
                        for post in visible.iter() {
                            BlogCard { key: "{post.id}", post: post.clone() }
                        }
                    }
                }

                Pagination {
                    current: page(),
                    total: pages,
                    on_change: move |p| page.set(p),
                }

                section { style: "margin-top: 4rem;",
                    h2 { class: "section-header", "Personal Stories" }
                    p { class: "body-text", style: "margin-bottom: 1rem;",
                        "Fan-shared experiences, in their own words."
                    }
                    StoryTimeline { stories: timeline_stories() }
                }

                section { style: "margin-top: 3rem;",
                    StoryForm {}
                }
            }
        }
    }
}
