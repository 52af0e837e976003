//! One journal post card.

use dioxus::prelude::*;
use keanuverse_core::BlogPost;

#[component]
pub fn BlogCard(post: BlogPost) -> Element {
    let published = chrono::DateTime::from_timestamp(post.published_at, 0)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_default();

    rsx! {
        article { class: "blog-card",
            span { class: "blog-card__category", "{post.category.label()}" }

            if post.featured {
                span { class: "featured-badge", style: "position: static; margin-left: 0.5rem;", "Featured" }
            }

            h3 { class: "blog-card__title", "{post.title}" }
            p { class: "body-text", "{post.excerpt}" }

            div { class: "blog-card__meta",
                span { "{published}" }
                span { "{post.read_time_min} min read" }
                span { "{post.mood.label()}" }
            }
        }
    }
}
