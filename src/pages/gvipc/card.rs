//! GVIPC card page.
//!
//! Issues the member card into the shared session on first visit (the
//! same card survives revisits) and renders it with the QR code. The
//! download is a simulated delay; the share action copies a line to the
//! system clipboard. The activation copy is satire - there is no payment
//! flow behind it.

use dioxus::prelude::*;
use keanuverse_core::IntakePayload;

use crate::components::{CardFace, MemberCardView, NavHeader, NavLocation};
use crate::context::{use_membership_session, use_services};

#[component]
pub fn GvipcCard() -> Element {
    let services = use_services();
    let mut session = use_membership_session();

    let mut downloading = use_signal(|| false);
    let mut notice: Signal<Option<String>> = use_signal(|| None);

    // Issue on mount; revisits keep the same member id
    let card = use_hook(|| session.write().issue_card().clone());

    let download_card = {
        let card = card.clone();
        move |_| {
            downloading.set(true);
            let intake = services.intake.clone();
            let member_id = card.member_id.to_string();
            spawn(async move {
                let payload = IntakePayload::CardDownload { member_id };
                match intake.submit(payload).await {
                    Ok(_) => notice.set(Some("Your GVIPC card has been downloaded!".to_string())),
                    Err(e) => notice.set(Some(format!("Download failed: {e}"))),
                }
                downloading.set(false);
            });
        }
    };

    let share_card = {
        let card = card.clone();
        move |_| {
            let line = card.share_line();
            match arboard::Clipboard::new() {
                Ok(mut clipboard) => {
                    if clipboard.set_text(&line).is_ok() {
                        notice.set(Some("Share text copied to your clipboard.".to_string()));
                    } else {
                        notice.set(Some("Could not reach the clipboard.".to_string()));
                    }
                }
                Err(e) => {
                    tracing::warn!("clipboard unavailable: {}", e);
                    notice.set(Some("Could not reach the clipboard.".to_string()));
                }
            }
        }
    };

    rsx! {
        div { class: "page",
            NavHeader { current: NavLocation::Gvipc }

            div { class: "container",
                div { class: "page-header",
                    h1 { class: "page-title", "Congratulations!" }
                    p { class: "page-subtitle",
                        "You've successfully completed the GVIPC challenge and earned your \
                        membership card."
                    }
                }

                if let Some(msg) = notice() {
                    div { class: "notice-banner",
                        span { "{msg}" }
                        button {
                            class: "btn-ghost",
                            onclick: move |_| notice.set(None),
                            "dismiss"
                        }
                    }
                }

                MemberCardView { face: CardFace::Issued(card.clone()) }

                p { class: "body-text", style: "text-align: center; max-width: 32rem; margin: 2rem auto;",
                    "I kindly request that you activate your GVIPC Partnership card, which \
                    costs $1500, to enable access to scan the QR code."
                }

                div { style: "display: flex; justify-content: center; gap: 1rem;",
                    button {
                        class: "btn-primary",
                        disabled: downloading(),
                        onclick: download_card,
                        if downloading() {
                            span { class: "spinner" }
                            "Downloading..."
                        } else {
                            "⬇ Download Card"
                        }
                    }

                    button {
                        class: "btn-secondary",
                        onclick: share_card,
                        "Share"
                    }
                }
            }
        }
    }
}
