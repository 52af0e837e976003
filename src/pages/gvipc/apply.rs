//! GVIPC application page.
//!
//! Form on the left, live card preview on the right. A valid application
//! goes through the intake, lands in the shared membership session, and
//! the wizard moves on to the challenge page.

use dioxus::prelude::*;
use keanuverse_core::{
    FieldErrors, IntakePayload, MembershipApplication, FAVORITE_MOVIES, REASON_MAX_CHARS,
};

use crate::app::Route;
use crate::components::{CardFace, MemberCardView, NavHeader, NavLocation};
use crate::context::{use_membership_session, use_services};

#[component]
pub fn GvipcApply() -> Element {
    let navigator = use_navigator();
    let services = use_services();
    let mut session = use_membership_session();

    let mut application = use_signal(MembershipApplication::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |_| {
        let found = application.read().validate();
        let ok = found.is_empty();
        errors.set(found);
        if !ok {
            return;
        }

        submitting.set(true);
        let intake = services.intake.clone();
        spawn(async move {
            let app = application();
            let payload = IntakePayload::Application {
                full_name: app.full_name.clone(),
                email: app.email.clone(),
                favorite_movie: app.favorite_movie.clone(),
                reason: app.reason.clone(),
            };

            match intake.submit(payload).await {
                Ok(id) => {
                    tracing::info!("application accepted as {}", id);
                    session.write().accept_application(app);
                    submitting.set(false);
                    navigator.push(Route::GvipcChallenge {});
                }
                Err(e) => {
                    errors.write().set("submit", e.to_string());
                    submitting.set(false);
                }
            }
        });
    };

    let reason_chars = application.read().reason_chars();

    rsx! {
        div { class: "page",
            NavHeader { current: NavLocation::Gvipc }

            div { class: "container",
                div { class: "page-header",
                    h1 { class: "page-title", "GVIPC Membership Card" }
                    p { class: "page-subtitle",
                        "Join the Global VIP Partnership Club and get exclusive access to \
                        Keanu content, events, and more."
                    }
                }

                div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(24rem, 1fr)); gap: 3rem;",
                    // Form column
                    div { class: "form-panel",
                        h2 { class: "section-header", "Application Form" }

                        if let Some(err) = errors.read().get("submit") {
                            div { class: "notice-banner error", "{err}" }
                        }

                        div { class: "form-field",
                            label { class: "form-label", "Full Name" }
                            input {
                                class: if errors.read().get("fullName").is_some() { "form-input invalid" } else { "form-input" },
                                r#type: "text",
                                value: "{application.read().full_name}",
                                placeholder: "Enter your full name",
                                oninput: move |e| {
                                    application.write().full_name = e.value();
                                    errors.write().clear("fullName");
                                },
                            }
                            if let Some(err) = errors.read().get("fullName") {
                                p { class: "error-text", "{err}" }
                            }
                        }

                        div { class: "form-field",
                            label { class: "form-label", "Email Address" }
                            input {
                                class: if errors.read().get("email").is_some() { "form-input invalid" } else { "form-input" },
                                r#type: "email",
                                value: "{application.read().email}",
                                placeholder: "Enter your email address",
                                oninput: move |e| {
                                    application.write().email = e.value();
                                    errors.write().clear("email");
                                },
                            }
                            if let Some(err) = errors.read().get("email") {
                                p { class: "error-text", "{err}" }
                            }
                        }

                        div { class: "form-field",
                            label { class: "form-label", "Favorite Keanu Movie" }
                            select {
                                class: if errors.read().get("favoriteMovie").is_some() { "form-select invalid" } else { "form-select" },
                                value: "{application.read().favorite_movie}",
                                onchange: move |e| {
                                    application.write().favorite_movie = e.value();
                                    errors.write().clear("favoriteMovie");
                                },
                                option { value: "", "Select a movie" }
                                for movie in FAVORITE_MOVIES {
                                    option { key: "{movie}", value: "{movie}", "{movie}" }
                                }
                            }
                            if let Some(err) = errors.read().get("favoriteMovie") {
                                p { class: "error-text", "{err}" }
                            }
                        }

                        div { class: "form-field",
                            label { class: "form-label", "Why I'm a Fan (250 characters max)" }
                            textarea {
                                class: if errors.read().get("whyFan").is_some() { "form-textarea invalid" } else { "form-textarea" },
                                rows: 4,
                                maxlength: "{REASON_MAX_CHARS}",
                                value: "{application.read().reason}",
                                placeholder: "Tell us why you're a fan of Keanu Reeves...",
                                oninput: move |e| {
                                    application.write().reason = e.value();
                                    errors.write().clear("whyFan");
                                },
                            }
                            p { class: "char-count", "{reason_chars}/{REASON_MAX_CHARS} characters" }
                            if let Some(err) = errors.read().get("whyFan") {
                                p { class: "error-text", "{err}" }
                            }
                        }

                        div { style: "padding-top: 0.5rem;",
                            button {
                                class: "btn-primary",
                                style: "width: 100%;",
                                disabled: submitting(),
                                onclick: handle_submit,
                                if submitting() {
                                    span { class: "spinner" }
                                    "Processing..."
                                } else {
                                    "Submit Application"
                                }
                            }
                        }
                    }

                    // Card preview column
                    div { style: "display: flex; flex-direction: column; justify-content: center; align-items: center; gap: 2rem;",
                        MemberCardView {
                            face: CardFace::Preview { name: application.read().full_name.clone() },
                        }

                        p { class: "body-text", style: "text-align: center; max-width: 26rem;",
                            "Complete your application to receive your personalized GVIPC card. \
                            After submission, you'll need to complete a challenge to activate \
                            your membership."
                        }
                    }
                }
            }
        }
    }
}
