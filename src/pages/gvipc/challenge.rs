//! GVIPC challenge page.
//!
//! Pick one of three variants; each variant component owns its whole
//! state, so "Choose Different Challenge" just unmounts it - quiz
//! progress, uploads, and any live capture stream go with it. Completing
//! a variant submits through the intake, records the passed kind in the
//! session, and moves on to the card.

use dioxus::prelude::*;
use keanuverse_core::{ChallengeKind, IntakePayload};

use crate::app::Route;
use crate::components::challenge::{ArtUploadPanel, QuizPanel, VideoRecorderPanel};
use crate::components::{NavHeader, NavLocation};
use crate::context::{use_membership_session, use_services};

fn challenge_icon(kind: ChallengeKind) -> &'static str {
    match kind {
        ChallengeKind::Quiz => "❓",
        ChallengeKind::Art => "🖼",
        ChallengeKind::Video => "🎥",
    }
}

#[component]
pub fn GvipcChallenge() -> Element {
    let navigator = use_navigator();
    let services = use_services();
    let mut session = use_membership_session();

    let mut selected: Signal<Option<ChallengeKind>> = use_signal(|| None);
    let mut submitting = use_signal(|| false);

    let mut complete_challenge = move |kind: ChallengeKind| {
        submitting.set(true);
        let intake = services.intake.clone();
        spawn(async move {
            let payload = IntakePayload::Challenge {
                variant: kind.as_str().to_string(),
            };
            match intake.submit(payload).await {
                Ok(_) => {
                    session.write().complete_challenge(kind);
                    submitting.set(false);
                    navigator.push(Route::GvipcCard {});
                }
                Err(e) => {
                    tracing::warn!("challenge submit failed: {}", e);
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "page",
            NavHeader { current: NavLocation::Gvipc }

            div { class: "container",
                div { class: "page-header",
                    h1 { class: "page-title", "GVIPC Challenge" }
                    p { class: "page-subtitle",
                        "Complete one of the following challenges to activate your GVIPC membership."
                    }
                }

                if let Some(kind) = selected() {
                    div { class: "challenge-panel",
                        div { class: "challenge-panel__header",
                            h2 { class: "section-header", style: "margin-bottom: 0;", "{kind.title()}" }
                            button {
                                class: "btn-ghost",
                                onclick: move |_| selected.set(None),
                                "Choose Different Challenge"
                            }
                        }

                        {
                            match kind {
                                ChallengeKind::Quiz => rsx! {
                                    QuizPanel {
                                        submitting: submitting(),
                                        on_continue: move |_| complete_challenge(ChallengeKind::Quiz),
                                    }
                                },
                                ChallengeKind::Art => rsx! {
                                    ArtUploadPanel {
                                        submitting: submitting(),
                                        on_submit: move |_| complete_challenge(ChallengeKind::Art),
                                    }
                                },
                                ChallengeKind::Video => rsx! {
                                    VideoRecorderPanel {
                                        submitting: submitting(),
                                        on_submit: move |_| complete_challenge(ChallengeKind::Video),
                                    }
                                },
                            }
                        }
                    }
                } else {
                    div { class: "challenge-grid",
                        for kind in ChallengeKind::ALL {
                            div {
                                key: "{kind.as_str()}",
                                class: "challenge-card",
                                onclick: move |_| selected.set(Some(kind)),

                                div { class: "challenge-card__icon", "{challenge_icon(kind)}" }
                                h3 { class: "challenge-card__title", "{kind.title()}" }
                                p { class: "body-text", style: "font-size: 0.875rem;", "{kind.blurb()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
