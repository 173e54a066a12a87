use dioxus::prelude::*;
use services::SessionController;

use crate::context::AppContext;
use crate::views::DrillView;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_signal(|| SessionController::new(ctx.initial_config()));
    use_context_provider(|| session);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{ctx.window_title()}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                DrillView {}
            }
        }
    }
}
