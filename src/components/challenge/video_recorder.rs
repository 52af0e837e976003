//! Video tribute challenge panel.
//!
//! Owns the capture stream for its whole lifetime: acquired when the
//! panel mounts, released on stop, re-record, and unmount. The recorder
//! runs off a 1-second clock task that exits as soon as the recorder
//! leaves the recording state, so no callback outlives the take.

use std::time::Duration;

use dioxus::prelude::*;
use keanuverse_core::{
    CaptureConstraints, MediaStream, Recorder, RecorderState, MIN_RECORD_SECS,
};

use crate::context::use_services;

#[component]
pub fn VideoRecorderPanel(submitting: bool, on_submit: EventHandler<()>) -> Element {
    let services = use_services();

    let mut stream: Signal<Option<MediaStream>> = use_signal(|| None);
    let mut recorder = use_signal(Recorder::new);
    let mut capture_error: Signal<Option<String>> = use_signal(|| None);

    let devices = services.devices.clone();
    let acquire = move || {
        let devices = devices.clone();
        spawn(async move {
            match devices.request_stream(CaptureConstraints::default()).await {
                Ok(live) => {
                    capture_error.set(None);
                    stream.set(Some(live));
                }
                Err(e) => {
                    tracing::warn!("capture acquisition failed: {}", e);
                    capture_error.set(Some(e.to_string()));
                }
            }
        });
    };

    // Request camera access when the panel mounts
    let mount_acquire = acquire.clone();
    use_effect(move || {
        mount_acquire();
    });

    // Release the stream on every exit path, including unmount
    use_drop(move || {
        if let Some(mut live) = stream.write().take() {
            live.stop_tracks();
        }
    });

    let mut release_stream = move || {
        if let Some(live) = stream.write().as_mut() {
            live.stop_tracks();
        }
    };

    let start_recording = move |_| {
        if stream.read().is_none() {
            return;
        }
        if recorder.write().start().is_err() {
            return;
        }

        // 1-second clock; exits the moment the recorder is not recording
        spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(1)).await;
                let state = recorder.write().tick();
                if !matches!(state, RecorderState::Recording { .. }) {
                    // Auto-stop at the cap ends the live preview too
                    release_stream();
                    break;
                }
            }
        });
    };

    let stop_recording = move |_| {
        if recorder.write().stop().is_ok() {
            release_stream();
        }
    };

    let rerecord_acquire = acquire.clone();
    let record_again = move |_| {
        recorder.write().reset();
        stream.set(None);
        rerecord_acquire();
    };

    let state = recorder.read().state();
    let elapsed = recorder.read().elapsed();
    let seconds_short = MIN_RECORD_SECS.saturating_sub(elapsed);
    let recording = matches!(state, RecorderState::Recording { .. });
    let finished = matches!(state, RecorderState::Finished(_));
    let meets_minimum = matches!(state, RecorderState::Finished(rec) if rec.meets_minimum());
    let has_stream = stream.read().is_some();

    rsx! {
        div {
            p { class: "body-text", style: "margin-bottom: 1.5rem;",
                "Record a short video (10-15 seconds) sharing why you're a Keanu fan."
            }

            if let Some(err) = capture_error() {
                // Permission was refused: no retry flow, pick another challenge
                div { class: "notice-banner error",
                    span { "{err}" }
                }
            } else {
                div { class: "recorder-stage",
                    if finished {
                        div { style: "text-align: center;",
                            p { style: "font-size: 2rem;", "🎞" }
                            p { "Recorded {elapsed}s tribute" }
                        }
                    } else if has_stream {
                        p { "● Live camera preview" }
                    } else {
                        p { "Connecting to camera..." }
                    }

                    if recording {
                        div { class: "recording-pill",
                            span { class: "recording-dot" }
                            span { "{elapsed}s" }
                        }
                    }
                }

                div { class: "recorder-actions",
                    if !finished && !recording {
                        button {
                            class: "btn-primary",
                            disabled: !has_stream,
                            onclick: start_recording,
                            "Start Recording"
                        }
                    }

                    if recording {
                        button {
                            class: "btn-secondary",
                            onclick: stop_recording,
                            if elapsed < MIN_RECORD_SECS {
                                "Stop Recording ({seconds_short}s more needed)"
                            } else {
                                "Stop Recording"
                            }
                        }
                    }

                    if finished {
                        button {
                            class: "btn-secondary",
                            onclick: record_again,
                            "Record Again"
                        }
                        button {
                            class: "btn-primary",
                            disabled: submitting || !meets_minimum,
                            onclick: move |_| on_submit.call(()),
                            if submitting {
                                span { class: "spinner" }
                                "Processing..."
                            } else {
                                "Submit Video"
                            }
                        }
                    }
                }

                if finished && !meets_minimum {
                    p { class: "error-text", style: "text-align: center; margin-top: 1rem;",
                        "Your video must be at least 10 seconds long. Please record again."
                    }
                }
            }
        }
    }
}
