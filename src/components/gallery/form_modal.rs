//! Two-step submission form modal.
//!
//! Step 1 collects the work (title, type, file, description), step 2 the
//! creator info. Each transition is guarded by field validation; the
//! terminal submit goes through the simulated intake and ends on a
//! thank-you state. Closing resets the whole draft.

use dioxus::prelude::*;
use keanuverse_core::{
    AcceptPolicy, ArtUpload, FieldErrors, IntakePayload, SubmissionDraft, SubmissionFormStep,
    SubmissionType,
};
use rfd::FileDialog;

use crate::context::use_services;

#[component]
pub fn SubmissionFormModal(show: bool, on_close: EventHandler<()>) -> Element {
    let services = use_services();

    let mut draft = use_signal(SubmissionDraft::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut step = use_signal(|| SubmissionFormStep::Details);
    let mut submitting = use_signal(|| false);

    let pick_file = move |_| {
        spawn(async move {
            let picked = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("media", AcceptPolicy::ImageOrVideo.extensions())
                    .set_title("Select your fan art")
                    .pick_file()
            })
            .await;

            let Ok(Some(path)) = picked else {
                return; // cancelled or picker failed
            };

            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("upload")
                .to_string();

            match std::fs::read(&path) {
                Ok(bytes) => {
                    match ArtUpload::from_bytes(&file_name, &bytes, AcceptPolicy::ImageOrVideo) {
                        Ok(upload) => {
                            draft.write().file = Some(upload);
                            errors.write().clear("file");
                        }
                        Err(e) => {
                            draft.write().file = None;
                            errors.write().set("file", e.to_string());
                        }
                    }
                }
                Err(e) => {
                    errors.write().set("file", format!("Could not read file: {e}"));
                }
            }
        });
    };

    let handle_submit = move |_| {
        match step() {
            SubmissionFormStep::Details => {
                let found = draft.read().validate_details();
                let ok = found.is_empty();
                errors.set(found);
                if ok {
                    step.set(SubmissionFormStep::CreatorInfo);
                }
            }
            SubmissionFormStep::CreatorInfo => {
                let found = draft.read().validate_creator();
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
                        IntakePayload::FanArt {
                            title: d.title.clone(),
                            submission_type: d.kind.unwrap_or(SubmissionType::Other),
                            file_name: d
                                .file
                                .as_ref()
                                .map(|f| f.file_name.clone())
                                .unwrap_or_default(),
                            description: d.description.clone(),
                            creator_name: d.name.clone(),
                            creator_email: d.email.clone(),
                            country: (!d.country.trim().is_empty()).then(|| d.country.clone()),
                            tags: d.parsed_tags(),
                        }
                    };

                    match intake.submit(payload).await {
                        Ok(id) => {
                            tracing::info!("fan art submitted as {}", id);
                            step.set(SubmissionFormStep::Submitted);
                        }
                        Err(e) => {
                            errors.write().set("submit", e.to_string());
                        }
                    }
                    submitting.set(false);
                });
            }
            SubmissionFormStep::Submitted => {}
        }
    };

    let mut handle_close = move |_| {
        draft.write().reset();
        errors.write().clear_all();
        step.set(SubmissionFormStep::Details);
        submitting.set(false);
        on_close.call(());
    };

    if !show {
        return rsx! {};
    }

    let on_step_two = step() == SubmissionFormStep::CreatorInfo;

    rsx! {
        div {
            class: "modal-overlay",
            tabindex: "0",
            autofocus: true,
            onkeydown: move |e| {
                if e.key() == Key::Escape {
                    handle_close(());
                }
            },
            onclick: move |_| handle_close(()),

            div {
                class: "modal",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    h2 { class: "modal-title",
                        if step() == SubmissionFormStep::Submitted {
                            "Submission Complete"
                        } else {
                            "Submit Your Fan Art"
                        }
                    }
                    button {
                        class: "modal-close",
                        aria_label: "Close modal",
                        onclick: move |_| handle_close(()),
                        "✕"
                    }
                }

                div { class: "modal-body",
                    if step() == SubmissionFormStep::Submitted {
                        div { style: "text-align: center; padding: 2rem 0;",
                            div { style: "font-size: 3rem; margin-bottom: 1rem;", "✓" }
                            h3 { class: "section-header", "Thank You for Your Submission!" }
                            p { class: "body-text", style: "margin-bottom: 1.5rem;",
                                "Your fan art has been submitted successfully. Our team will review it shortly."
                            }
                            button {
                                class: "btn-primary",
                                onclick: move |_| handle_close(()),
                                "Close"
                            }
                        }
                    } else {
                        // Step indicator
                        div { class: "step-indicator",
                            div { class: "step-dot reached", "1" }
                            div { class: if on_step_two { "step-bar reached" } else { "step-bar" } }
                            div { class: if on_step_two { "step-dot reached" } else { "step-dot" }, "2" }
                        }

                        if let Some(err) = errors.read().get("submit") {
                            div { class: "notice-banner error", "{err}" }
                        }

                        if step() == SubmissionFormStep::Details {
                            div {
                                div { class: "form-field",
                                    label { class: "form-label", "Title" }
                                    input {
                                        class: if errors.read().get("title").is_some() { "form-input invalid" } else { "form-input" },
                                        r#type: "text",
                                        value: "{draft.read().title}",
                                        placeholder: "Give your submission a title",
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
                                    label { class: "form-label", "Submission Type" }
                                    select {
                                        class: if errors.read().get("type").is_some() { "form-select invalid" } else { "form-select" },
                                        value: draft.read().kind.map(|k| k.as_str()).unwrap_or(""),
                                        onchange: move |e| {
                                            draft.write().kind = SubmissionType::parse(&e.value());
                                            errors.write().clear("type");
                                        },
                                        option { value: "", "Select a type" }
                                        for kind in SubmissionType::ALL {
                                            option { key: "{kind.as_str()}", value: "{kind.as_str()}", "{kind.label()}" }
                                        }
                                    }
                                    if let Some(err) = errors.read().get("type") {
                                        p { class: "error-text", "{err}" }
                                    }
                                }

                                div { class: "form-field",
                                    label { class: "form-label", "Upload File" }
                                    div {
                                        class: if errors.read().get("file").is_some() {
                                            "drop-zone invalid"
                                        } else if draft.read().file.is_some() {
                                            "drop-zone filled"
                                        } else {
                                            "drop-zone"
                                        },
                                        onclick: pick_file,

                                        if let Some(upload) = &draft.read().file {
                                            if let Some(preview) = &upload.preview {
                                                img { class: "upload-preview", src: "{preview}", alt: "Preview" }
                                            } else {
                                                p { "🎬 {upload.file_name}" }
                                            }
                                        } else {
                                            p { style: "margin-bottom: 0.25rem;", "Click to upload" }
                                            p { class: "form-hint", "PNG, JPG, GIF, MP4 (max 5MB)" }
                                        }
                                    }
                                    if let Some(err) = errors.read().get("file") {
                                        p { class: "error-text", "{err}" }
                                    }
                                    if let Some(upload) = &draft.read().file {
                                        div { class: "upload-file-row",
                                            span { "{upload.file_name}" }
                                            button {
                                                class: "btn-ghost",
                                                onclick: move |e| {
                                                    e.stop_propagation();
                                                    draft.write().file = None;
                                                },
                                                "Remove"
                                            }
                                        }
                                    }
                                }

                                div { class: "form-field",
                                    label { class: "form-label", "Description" }
                                    textarea {
                                        class: if errors.read().get("description").is_some() { "form-textarea invalid" } else { "form-textarea" },
                                        rows: 4,
                                        value: "{draft.read().description}",
                                        placeholder: "Tell us about your submission...",
                                        oninput: move |e| {
                                            draft.write().description = e.value();
                                            errors.write().clear("description");
                                        },
                                    }
                                    if let Some(err) = errors.read().get("description") {
                                        p { class: "error-text", "{err}" }
                                    }
                                }

                                div { class: "form-field",
                                    label { class: "form-label", "Tags (Optional)" }
                                    input {
                                        class: "form-input",
                                        r#type: "text",
                                        value: "{draft.read().tags}",
                                        placeholder: "matrix, neo, john-wick (comma separated)",
                                        oninput: move |e| draft.write().tags = e.value(),
                                    }
                                    p { class: "form-hint", "Separate tags with commas" }
                                }
                            }
                        } else {
                            div {
                                div { class: "form-field",
                                    label { class: "form-label", "Your Name" }
                                    input {
                                        class: if errors.read().get("name").is_some() { "form-input invalid" } else { "form-input" },
                                        r#type: "text",
                                        value: "{draft.read().name}",
                                        placeholder: "Enter your name",
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
                                        placeholder: "Enter your email address",
                                        oninput: move |e| {
                                            draft.write().email = e.value();
                                            errors.write().clear("email");
                                        },
                                    }
                                    if let Some(err) = errors.read().get("email") {
                                        p { class: "error-text", "{err}" }
                                    }
                                    p { class: "form-hint", "Your email will not be displayed publicly" }
                                }

                                div { class: "form-field",
                                    label { class: "form-label", "Country (Optional)" }
                                    input {
                                        class: "form-input",
                                        r#type: "text",
                                        value: "{draft.read().country}",
                                        placeholder: "Enter your country",
                                        oninput: move |e| draft.write().country = e.value(),
                                    }
                                }

                                div { class: "notice-banner",
                                    div {
                                        h4 { style: "margin-bottom: 0.5rem;", "Submission Guidelines" }
                                        ul { style: "padding-left: 1.25rem; font-size: 0.875rem;",
                                            li { "All submissions must be your original work" }
                                            li { "Inappropriate or offensive content will be removed" }
                                            li { "By submitting, you grant us permission to display your work" }
                                            li { "We may feature exceptional submissions on our social media" }
                                        }
                                    }
                                }
                            }
                        }

                        // Navigation buttons
                        div { style: "display: flex; justify-content: space-between; margin-top: 1.5rem;",
                            if on_step_two {
                                button {
                                    class: "btn-secondary",
                                    onclick: move |_| step.set(SubmissionFormStep::Details),
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
                                } else if on_step_two {
                                    "Submit"
                                } else {
                                    "Continue"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
