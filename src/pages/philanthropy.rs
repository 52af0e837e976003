//! Philanthropy page - mission, impact numbers, initiatives, partners.

use dioxus::prelude::*;

use crate::components::{NavHeader, NavLocation};
use crate::data::{impact_stats, initiatives, partners};

#[component]
pub fn Philanthropy() -> Element {
    rsx! {
        div { class: "page",
            NavHeader { current: NavLocation::Philanthropy }

            div { class: "container",
                div { class: "page-header",
                    h1 { class: "page-title", "Philanthropy" }
                    p { class: "page-subtitle",
                        "Discover how targeted initiatives support causes that matter and \
                        create lasting positive impact in communities worldwide."
                    }
                }

                section { style: "margin-bottom: 3rem;",
                    h2 { class: "section-header", "The Mission" }
                    p { class: "body-text",
                        "Most of this giving happened for decades before anyone wrote it down: \
                        profit shares signed over to crews, hospital wings funded anonymously, \
                        foundations run without a name on the door. This page collects what has \
                        become public - behind every statistic are real people whose lives were \
                        changed."
                    }
                }

                div { class: "stat-row",
                    for stat in impact_stats() {
                        div { key: "{stat.label}",
                            div { class: "stat-value", "{stat.value}" }
                            div { class: "stat-label", "{stat.label}" }
                        }
                    }
                }

                section { id: "initiatives", style: "margin-bottom: 3rem;",
                    h2 { class: "section-header", "Initiatives" }
                    p { class: "body-text", style: "margin-bottom: 1.5rem;",
                        "Each initiative is carefully selected and managed to ensure maximum positive impact."
                    }
                    div { class: "initiative-grid",
                        for initiative in initiatives() {
                            div {
                                key: "{initiative.title}",
                                class: "initiative-card",
                                div { style: "font-size: 2rem;", "{initiative.icon}" }
                                h3 { "{initiative.title}" }
                                p { class: "body-text", "{initiative.description}" }
                            }
                        }
                    }
                }

                section {
                    h2 { class: "section-header", "Partners" }
                    p { class: "body-text",
                        "Collaboration with established organizations that share the same values \
                        allows expertise and resources to go further."
                    }
                    div { class: "partner-row",
                        for partner in partners() {
                            span { key: "{partner}", class: "partner-pill", "{partner}" }
                        }
                    }
                }
            }
        }
    }
}
