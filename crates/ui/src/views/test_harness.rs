use dioxus::prelude::*;
use drill_core::model::{MaxFactor, PackSize, PracticeConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::SessionController;

use crate::views::{DrillView, PracticeView, SettingsForm};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Drill,
    Settings,
    Practice,
}

#[derive(Props, Clone, PartialEq)]
struct ViewHarnessProps {
    session: SessionController,
    view: ViewKind,
}

fn view_harness(props: ViewHarnessProps) -> Element {
    let session = use_signal(|| props.session.clone());
    use_context_provider(|| session);
    match props.view {
        ViewKind::Drill => rsx! { DrillView {} },
        ViewKind::Settings => rsx! { SettingsForm {} },
        ViewKind::Practice => rsx! { PracticeView {} },
    }
}

/// Render `view` against a snapshot of `session` to HTML.
pub fn render_view(session: SessionController, view: ViewKind) -> String {
    let mut dom = VirtualDom::new_with_props(view_harness, ViewHarnessProps { session, view });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

pub fn started_session(max: u32, size: PackSize, seed: u64) -> SessionController {
    let config = PracticeConfig::new(MaxFactor::new(max).unwrap(), size);
    let mut session = SessionController::new(config);
    session.start_with(&mut StdRng::seed_from_u64(seed)).unwrap();
    session
}

pub fn answer_all_correctly(session: &mut SessionController) {
    let total = session.total();
    for i in 0..total {
        let answer = session.current_question().unwrap().correct_answer();
        session.submit(Some(answer)).unwrap();
        if i + 1 < total {
            session.next().unwrap();
        }
    }
}
