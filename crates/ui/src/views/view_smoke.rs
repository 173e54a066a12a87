use drill_core::model::{PackSize, PracticeConfig};
use services::SessionController;

use super::test_harness::{ViewKind, answer_all_correctly, render_view, started_session};

#[test]
fn settings_form_renders_defaults() {
    let session = SessionController::new(PracticeConfig::default());
    let html = render_view(session, ViewKind::Settings);
    assert!(html.contains("Multiplication up to 2"), "missing stepper label in {html}");
    assert!(html.contains("Question amount:"), "missing picker label in {html}");
    assert!(html.contains("segment--selected"), "missing selected pack in {html}");
}

#[test]
fn drill_view_shows_start_button_when_configuring() {
    let session = SessionController::new(PracticeConfig::default());
    let html = render_view(session, ViewKind::Drill);
    assert!(html.contains("Practice multiplication"), "missing title in {html}");
    assert!(html.contains("Start practicing"), "missing start in {html}");
    assert!(!html.contains("Question 1/"), "unexpected practice view in {html}");
}

#[test]
fn practice_view_renders_first_question() {
    let session = started_session(7, PackSize::Ten, 17);
    let text = session.pack()[0].text().to_string();
    let html = render_view(session, ViewKind::Practice);
    assert!(html.contains("Question 1/10"), "missing position in {html}");
    assert!(html.contains(&text), "missing {text} in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(!html.contains("Correct!"), "unexpected feedback in {html}");
}

#[test]
fn practice_view_shows_feedback_after_wrong_submit() {
    let mut session = started_session(12, PackSize::Five, 3);
    session.submit(Some(0)).unwrap();
    let html = render_view(session, ViewKind::Practice);
    assert!(html.contains("Wrong!"), "missing feedback in {html}");
    assert!(html.contains("feedback--wrong"), "missing feedback class in {html}");
}

#[test]
fn drill_view_shows_finished_notice() {
    let mut session = started_session(5, PackSize::Five, 8);
    answer_all_correctly(&mut session);
    let html = render_view(session, ViewKind::Drill);
    assert!(html.contains("Practice finished"), "missing notice title in {html}");
    assert!(
        html.contains("Your score is 5 out of 5 questions."),
        "missing notice message in {html}"
    );
    assert!(html.contains("Question 5/5"), "missing position in {html}");
}
