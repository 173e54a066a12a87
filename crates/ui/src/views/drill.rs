use dioxus::prelude::*;
use services::SessionController;

use crate::views::{FinishedAlert, PracticeView, SettingsForm};

/// Top-level screen: the settings form or the running session, plus the
/// one-time finished notice.
#[component]
pub fn DrillView() -> Element {
    let mut session = use_context::<Signal<SessionController>>();
    let practicing = session.read().is_practicing();
    let notice = session.read().finished_notice();

    let body = if practicing {
        rsx! { PracticeView {} }
    } else {
        rsx! {
            SettingsForm {}
            button {
                id: "drill-start",
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| {
                    let _ = session.write().start();
                },
                "Start practicing"
            }
        }
    };
    let alert = notice.map(|notice| rsx! { FinishedAlert { notice } });

    rsx! {
        div { class: "page",
            h2 { class: "page-title", "Practice multiplication" }
            {body}
            div { class: "spacer" }
            button {
                id: "drill-end",
                class: "btn btn-secondary",
                r#type: "button",
                disabled: !practicing,
                onclick: move |_| {
                    let _ = session.write().end();
                },
                "End practice"
            }
            {alert}
        }
    }
}
