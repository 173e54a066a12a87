use dioxus::prelude::*;
use services::SessionController;

use crate::vm::map_settings;

#[component]
pub fn SettingsForm() -> Element {
    let mut session = use_context::<Signal<SessionController>>();
    let vm = map_settings(&session.read().config());

    rsx! {
        section { class: "settings",
            div { class: "stepper",
                span { class: "stepper-label", "{vm.max_factor_label}" }
                button {
                    class: "stepper-btn",
                    r#type: "button",
                    aria_label: "Decrease",
                    disabled: !vm.can_decrement,
                    onclick: move |_| {
                        let _ = session.write().decrement_max_factor();
                    },
                    "-"
                }
                button {
                    class: "stepper-btn",
                    r#type: "button",
                    aria_label: "Increase",
                    disabled: !vm.can_increment,
                    onclick: move |_| {
                        let _ = session.write().increment_max_factor();
                    },
                    "+"
                }
            }

            div { class: "pack-picker",
                span { "Question amount:" }
                div { class: "segmented",
                    for option in vm.pack_options {
                        button {
                            key: "{option.count}",
                            class: option.class,
                            r#type: "button",
                            onclick: move |_| {
                                let _ = session.write().set_pack_size(option.size);
                            },
                            "{option.count}"
                        }
                    }
                }
            }
        }
    }
}
