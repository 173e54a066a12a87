use std::sync::Arc;

use drill_core::model::PracticeConfig;

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn initial_config(&self) -> PracticeConfig;

    fn window_title(&self) -> String {
        "Practice multiplication".to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppContext {
    initial_config: PracticeConfig,
    window_title: String,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_config: app.initial_config(),
            window_title: app.window_title(),
        }
    }

    #[must_use]
    pub fn initial_config(&self) -> PracticeConfig {
        self.initial_config
    }

    #[must_use]
    pub fn window_title(&self) -> &str {
        &self.window_title
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
