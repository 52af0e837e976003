//! Two-step "Share Your Story" form.
//!
//! Step 1: byline, title, capped summary. Step 2: the story itself (100
//! character minimum) and consent. Submission goes through the simulated
//! intake like everything else.

use dioxus::prelude::*;
use keanuverse_core::{FieldErrors, IntakePayload, StoryDraft};

use crate::context::use_services;

#[derive(Clone, Copy, PartialEq)]
enum FormStep {
    Details,
    Story,
    Submitted,
}

#[component]
pub fn StoryForm() -> Element {
    let services = use_services();

    let mut draft = use_signal(StoryDraft::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut step = use_signal(|| FormStep::Details);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |_| {
        match step() {
            FormStep::Details => {
                let found = draft.read().validate_details();
                let ok = found.is_empty();
                errors.set(found);
                if ok {
                    step.set(FormStep::Story);
                }
            }
            FormStep::Story => {
                let found = draft.read().validate_story();
                let ok = found.is_empty();
                errors.set(found);
                if !ok {
                    return;
                }

                submitting.set(true);
                let intake = services.intake.clone();
                spawn(async move {
                    let payload = {
                        let d = draft.read();
                        IntakePayload::Story {
                            title: d.title.clone(),
                            author_name: d.name.clone(),
                            author_email: d.email.clone(),
                            body: d.content.clone(),
                        }
                    };
                    match intake.submit(payload).await {
                        Ok(id) => {
                            tracing::info!("story submitted as {}", id);
                            step.set(FormStep::Submitted);
                        }
                        Err(e) => errors.write().set("submit", e.to_string()),
                    }
                    submitting.set(false);
                });
            }
            FormStep::Submitted => {}
        }
    };

    let share_another = move |_| {
        draft.write().reset();
        errors.write().clear_all();
        step.set(FormStep::Details);
    };

    let summary_chars = draft.read().summary.chars().count();

    rsx! {
        div { class: "form-panel",
            h3 { class: "section-header", "Share Your Story" }

            if step() == FormStep::Submitted {
                div { style: "text-align: center; padding: 1.5rem 0;",
                    div { style: "font-size: 2.5rem; margin-bottom: 0.75rem;", "✓" }
                    p { class: "body-text", style: "margin-bottom: 1.25rem;",
                        "Thank you for sharing. Our team reads every story before it joins the timeline."
                    }
                    button { class: "btn-secondary", onclick: share_another, "Share Another Story" }
                }
            } else {
                if let Some(err) = errors.read().get("submit") {
                    div { class: "notice-banner error", "{err}" }
                }

                if step() == FormStep::Details {
                    div {
                        div { class: "form-field",
                            label { class: "form-label", "Your Name" }
                            input {
                                class: if errors.read().get("name").is_some() { "form-input invalid" } else { "form-input" },
                                r#type: "text",
                                value: "{draft.read().name}",
                                oninput: move |e| {
                                    draft.write().name = e.value();
                                    errors.write().clear("name");
                                },
                            }
                            if let Some(err) = errors.read().get("name") {
                                p { class: "error-text", "{err}" }
                            }
                        }

                        div { class: "form-field",
                            label { class: "form-label", "Email Address" }
                            input {
                                class: if errors.read().get("email").is_some() { "form-input invalid" } else { "form-input" },
                                r#type: "email",
                                value: "{draft.read().email}",
                                oninput: move |e| {
                                    draft.write().email = e.value();
                                    errors.write().clear("email");
                                },
                            }
                            if let Some(err) = errors.read().get("email") {
                                p { class: "error-text", "{err}" }
                            }
                        }

                        div { class: "form-field",
                            label { class: "form-label", "Story Title" }
                            input {
                                class: if errors.read().get("title").is_some() { "form-input invalid" } else { "form-input" },
                                r#type: "text",
                                value: "{draft.read().title}",
                                oninput: move |e| {
                                    draft.write().title = e.value();
                                    errors.write().clear("title");
                                },
                            }
                            if let Some(err) = errors.read().get("title") {
                                p { class: "error-text", "{err}" }
                            }
                        }

                        div { class: "form-field",
                            label { class: "form-label", "Summary (150 characters max)" }
                            textarea {
                                class: if errors.read().get("summary").is_some() { "form-textarea invalid" } else { "form-textarea" },
                                rows: 2,
                                value: "{draft.read().summary}",
                                oninput: move |e| {
                                    draft.write().summary = e.value();
                                    errors.write().clear("summary");
                                },
                            }
                            p { class: "char-count", "{summary_chars}/150 characters" }
                            if let Some(err) = errors.read().get("summary") {
                                p { class: "error-text", "{err}" }
                            }
                        }
                    }
                } else {
                    div {
                        div { class: "form-field",
                            label { class: "form-label", "Your Story" }
                            textarea {
                                class: if errors.read().get("content").is_some() { "form-textarea invalid" } else { "form-textarea" },
                                rows: 8,
                                value: "{draft.read().content}",
                                placeholder: "Share your experience in your own words...",
                                oninput: move |e| {
                                    draft.write().content = e.value();
                                    errors.write().clear("content");
                                },
                            }
                            if let Some(err) = errors.read().get("content") {
                                p { class: "error-text", "{err}" }
                            }
                        }

                        div { class: "form-field",
                            label { style: "display: flex; gap: 0.5rem; align-items: baseline; color: var(--brand-silver); font-size: 0.875rem;",
                                input {
                                    r#type: "checkbox",
                                    checked: draft.read().consent,
                                    onchange: move |e| {
                                        draft.write().consent = e.checked();
                                        errors.write().clear("consent");
                                    },
                                }
                                span { "I consent to sharing this story publicly on the timeline" }
                            }
                            if let Some(err) = errors.read().get("consent") {
                                p { class: "error-text", "{err}" }
                            }
                        }
                    }
                }

                div { style: "display: flex; justify-content: space-between; margin-top: 1rem;",
                    if step() == FormStep::Story {
                        button {
                            class: "btn-secondary",
                            onclick: move |_| step.set(FormStep::Details),
                            "Back"
                        }
                    } else {
                        div {}
                    }

                    button {
                        class: "btn-primary",
                        disabled: submitting(),
                        onclick: handle_submit,
                        if submitting() {
                            span { class: "spinner" }
                            "Submitting..."
                        } else if step() == FormStep::Story {
                            "Share Story"
                        } else {
                            "Continue"
                        }
                    }
                }
            }
        }
    }
}
