use dioxus::prelude::*;
use drill_core::model::FinishedNotice;
use services::SessionController;

#[component]
pub fn FinishedAlert(notice: FinishedNotice) -> Element {
    let mut session = use_context::<Signal<SessionController>>();

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal", role: "alertdialog",
                h3 { "{notice.title()}" }
                p { "{notice.message()}" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        session.write().dismiss_finished_notice();
                    },
                    "OK"
                }
            }
        }
    }
}
