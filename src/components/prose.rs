//! Read-only markdown renderer.

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Convert markdown to an HTML string
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Markdown body rendered as styled prose
#[component]
pub fn Prose(content: String) -> Element {
    let rendered = markdown_to_html(&content);

    rsx! {
        div {
            class: "prose",
            dangerous_inner_html: "{rendered}",
        }
    }
}
