//! Trivia quiz challenge panel.

use dioxus::prelude::*;
use keanuverse_core::Quiz;

#[component]
pub fn QuizPanel(submitting: bool, on_continue: EventHandler<()>) -> Element {
    let mut quiz = use_signal(Quiz::default);

    let question_number = quiz.read().current_index() + 1;
    let total = quiz.read().len();
    let outcome = quiz.read().outcome();

    rsx! {
        if let Some(result) = outcome {
            // Results screen
            div { style: "text-align: center;",
                div { class: "quiz-score-ring", "{result.score}/{result.total}" }

                h3 { class: "section-header",
                    if result.passed() { "Challenge Completed!" } else { "Try Again" }
                }

                p { class: "body-text", style: "margin-bottom: 1.5rem;",
                    if result.passed() {
                        "You've passed the Keanu Trivia Quiz. Your knowledge of Keanu is impressive!"
                    } else {
                        "You need to score at least 2/3 to pass. Try again or select a different challenge."
                    }
                }

                if result.passed() {
                    button {
                        class: "btn-primary",
                        disabled: submitting,
                        onclick: move |_| on_continue.call(()),
                        if submitting {
                            span { class: "spinner" }
                            "Processing..."
                        } else {
                            "Continue to Your GVIPC Card"
                        }
                    }
                } else {
                    button {
                        class: "btn-secondary",
                        onclick: move |_| quiz.write().retry(),
                        "Try Again"
                    }
                }
            }
        } else {
            // Question screen
            div {
                div { class: "quiz-progress",
                    span { "Question {question_number} of {total}" }
                    span {
                        if quiz.read().selected().is_some() { "Answered" } else { "Unanswered" }
                    }
                }

                h3 { style: "font-size: 1.25rem; margin-bottom: 1.25rem;",
                    "{quiz.read().current_question().prompt}"
                }

                div {
                    for (index, option) in quiz.read().current_question().options.clone().into_iter().enumerate() {
                        div {
                            key: "{index}",
                            class: if quiz.read().selected() == Some(index) { "quiz-option selected" } else { "quiz-option" },
                            onclick: move |_| quiz.write().select(index),
                            "{option}"
                        }
                    }
                }

                div { style: "padding-top: 1rem;",
                    button {
                        class: "btn-primary",
                        disabled: !quiz.read().can_advance(),
                        onclick: move |_| { quiz.write().advance(); },
                        if quiz.read().on_last_question() { "Submit Answers" } else { "Next Question" }
                    }
                }
            }
        }
    }
}
