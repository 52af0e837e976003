//! Fan-art upload challenge panel.
//!
//! A single accepted image (JPG/PNG/GIF, 5 MB cap) completes the
//! challenge; nothing is checked server-side because nothing is sent
//! anywhere.

use dioxus::prelude::*;
use keanuverse_core::{AcceptPolicy, ArtUpload};
use rfd::FileDialog;

#[component]
pub fn ArtUploadPanel(submitting: bool, on_submit: EventHandler<()>) -> Element {
    let mut upload: Signal<Option<ArtUpload>> = use_signal(|| None);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    let pick_file = move |_| {
        spawn(async move {
            let picked = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", AcceptPolicy::ImageOnly.extensions())
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
                .unwrap_or("artwork")
                .to_string();

            match std::fs::read(&path) {
                Ok(bytes) => match ArtUpload::from_bytes(&file_name, &bytes, AcceptPolicy::ImageOnly) {
                    Ok(accepted) => {
                        error.set(None);
                        upload.set(Some(accepted));
                    }
                    Err(e) => {
                        upload.set(None);
                        error.set(Some(e.to_string()));
                    }
                },
                Err(e) => error.set(Some(format!("Could not read file: {e}"))),
            }
        });
    };

    rsx! {
        div {
            p { class: "body-text", style: "margin-bottom: 1.5rem;",
                "Upload your Keanu-inspired fan art. Show your creativity and appreciation for his work."
            }

            if let Some(err) = error() {
                div { class: "notice-banner error",
                    span { "{err}" }
                    button {
                        class: "btn-ghost",
                        onclick: move |_| error.set(None),
                        "dismiss"
                    }
                }
            }

            if let Some(art) = upload() {
                div {
                    div { class: "drop-zone filled",
                        if let Some(preview) = &art.preview {
                            img { class: "upload-preview", src: "{preview}", alt: "Fan Art Preview" }
                        }
                    }

                    div { class: "upload-file-row",
                        span { "{art.file_name}" }
                        button {
                            class: "btn-ghost",
                            onclick: move |_| upload.set(None),
                            "Remove"
                        }
                    }

                    div { style: "padding-top: 1rem;",
                        button {
                            class: "btn-primary",
                            disabled: submitting,
                            onclick: move |_| on_submit.call(()),
                            if submitting {
                                span { class: "spinner" }
                                "Processing..."
                            } else {
                                "Submit Fan Art"
                            }
                        }
                    }
                }
            } else {
                div {
                    class: "drop-zone",
                    onclick: pick_file,
                    p { style: "font-size: 2rem; margin-bottom: 0.5rem;", "🖼" }
                    p { style: "margin-bottom: 0.25rem;", "Click to upload your fan art" }
                    p { class: "form-hint", "JPG, PNG, or GIF (max 5MB)" }
                }
            }
        }
    }
}
