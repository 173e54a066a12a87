use dioxus::prelude::*;
use services::SessionController;

use crate::vm::{map_practice, parse_response};

#[component]
pub fn PracticeView() -> Element {
    let mut session = use_context::<Signal<SessionController>>();
    let mut draft = use_signal(String::new);

    let Some(vm) = map_practice(&session.read()) else {
        return rsx! {
            p { class: "empty", "No questions in this pack." }
        };
    };
    let response_value = vm
        .submitted_response
        .clone()
        .unwrap_or_else(|| draft.read().clone());
    let feedback = vm.feedback.map(|feedback| {
        rsx! {
            span { class: feedback.class, "{feedback.label}" }
        }
    });

    rsx! {
        div { class: "practice",
            p { class: "practice-position", "{vm.position_label}" }

            div { class: "practice-question",
                button {
                    class: "btn",
                    r#type: "button",
                    disabled: !vm.can_previous,
                    onclick: move |_| {
                        if session.write().previous().is_ok() {
                            draft.set(String::new());
                        }
                    },
                    "Previous"
                }
                div { class: "question-text",
                    span { "{vm.question_text}" }
                    span { "=" }
                }
                button {
                    class: "btn",
                    r#type: "button",
                    disabled: !vm.can_next,
                    onclick: move |_| {
                        if session.write().next().is_ok() {
                            draft.set(String::new());
                        }
                    },
                    "Next"
                }
            }

            div { class: "practice-answer",
                label { r#for: "practice-answer-input", "Your answer:" }
                div { class: "answer-row",
                    input {
                        id: "practice-answer-input",
                        class: "answer-input",
                        r#type: "number",
                        value: "{response_value}",
                        disabled: vm.is_submitted,
                        oninput: move |evt| draft.set(evt.value()),
                    }
                    {feedback}
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: !vm.can_submit,
                    onclick: move |_| {
                        let response = parse_response(&draft.read());
                        if session.write().submit(response).is_ok() {
                            draft.set(String::new());
                        }
                    },
                    "Submit"
                }
            }

            p { class: "practice-score", "{vm.score_label}" }
        }
    }
}
