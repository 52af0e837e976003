//! GVIPC member card rendering.
//!
//! Two faces: the live preview beside the application form (blue, no id)
//! and the issued card (gold, member id plus QR code).

use chrono::Datelike;
use dioxus::prelude::*;
use keanuverse_core::MemberCard;
use qrcode::render::svg;
use qrcode::QrCode;

/// Which face of the card to render
#[derive(Clone, PartialEq)]
pub enum CardFace {
    /// Application-form preview; name mirrors the form as the user types
    Preview { name: String },
    /// The issued card from the membership session
    Issued(MemberCard),
}

/// Generate the QR SVG for an issued card.
///
/// Width/height attributes are stripped so the CSS box controls sizing;
/// the viewBox is preserved for scaling.
fn member_qr_svg(data: &str) -> String {
    match QrCode::new(data.as_bytes()) {
        Ok(code) => {
            let size = 96;
            let svg_string = code
                .render()
                .min_dimensions(size, size)
                .dark_color(svg::Color("#0a0a0a"))
                .light_color(svg::Color("transparent"))
                .build();
            svg_string.replace(&format!("width=\"{size}\" height=\"{size}\" "), "")
        }
        Err(e) => {
            tracing::error!("Failed to generate card QR code: {:?}", e);
            String::new()
        }
    }
}

#[component]
pub fn MemberCardView(face: CardFace) -> Element {
    let issued = matches!(face, CardFace::Issued(_));

    let (name, member_id, member_since) = match &face {
        CardFace::Preview { name } => {
            let shown = if name.trim().is_empty() {
                "Your Name Here".to_string()
            } else {
                name.clone()
            };
            (shown, None, chrono::Utc::now().year())
        }
        CardFace::Issued(card) => (
            card.member_name.clone(),
            Some(card.member_id.to_string()),
            card.member_since,
        ),
    };

    rsx! {
        div {
            class: if issued { "member-card gold" } else { "member-card" },

            div { class: "member-card__inner",
                div { class: "member-card__top",
                    div {
                        h3 { class: "member-card__club", "GVIPC" }
                        p { class: "member-card__club-sub", "Global VIP Partnership Club" }
                    }
                    div { class: "member-card__seal", "KEANU" }
                }

                div { class: "member-card__bottom",
                    div {
                        p { class: "member-card__field-label", "Member Name" }
                        p { class: "member-card__name", "{name}" }
                        if let Some(id) = &member_id {
                            p { class: "member-card__field-label", "Member ID" }
                            p { class: "member-card__field-value", "{id}" }
                        }
                    }
                    div {
                        p { class: "member-card__field-label", "Member Since" }
                        p { class: "member-card__field-value", "{member_since}" }
                    }
                    div {
                        p { class: "member-card__field-label", "Status" }
                        p { class: "member-card__field-value", "PREMIUM" }
                    }
                }
            }

            if let Some(id) = &member_id {
                div {
                    class: "member-card__qr",
                    dangerous_inner_html: member_qr_svg(id),
                }
            }
        }
    }
}
