use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use drill_core::model::PracticeConfig;
use ui::{App, UiApp, build_app_context};

struct DesktopApp {
    config: PracticeConfig,
}

impl UiApp for DesktopApp {
    fn initial_config(&self) -> PracticeConfig {
        self.config
    }
}

pub fn launch(config: PracticeConfig) {
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { config });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(context.window_title())
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}
