use drill_core::model::AnswerFeedback;
use services::SessionController;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub label: &'static str,
    pub class: &'static str,
}

impl From<AnswerFeedback> for FeedbackVm {
    fn from(feedback: AnswerFeedback) -> Self {
        let class = match feedback {
            AnswerFeedback::Correct => "feedback feedback--correct",
            AnswerFeedback::Wrong => "feedback feedback--wrong",
        };
        Self {
            label: feedback.label(),
            class,
        }
    }
}

/// Everything the practice screen needs for the current question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeVm {
    pub position_label: String,
    pub question_text: String,
    pub submitted_response: Option<String>,
    pub is_submitted: bool,
    pub feedback: Option<FeedbackVm>,
    pub can_previous: bool,
    pub can_next: bool,
    pub can_submit: bool,
    pub score_label: String,
}

/// Returns `None` when there is no current question to show.
#[must_use]
pub fn map_practice(session: &SessionController) -> Option<PracticeVm> {
    let question = session.current_question()?;
    let submitted_response = if question.is_submitted() {
        Some(
            question
                .user_response()
                .map_or_else(String::new, |value| value.to_string()),
        )
    } else {
        None
    };

    Some(PracticeVm {
        position_label: format!(
            "Question {}/{}",
            session.current_index() + 1,
            session.total()
        ),
        question_text: question.text().to_string(),
        submitted_response,
        is_submitted: question.is_submitted(),
        feedback: question.feedback().map(FeedbackVm::from),
        can_previous: session.can_previous(),
        can_next: session.can_next(),
        can_submit: session.can_submit(),
        score_label: format!("Score: {}", session.score()),
    })
}

/// Numeric parsing for the answer field. Anything that is not an integer
/// counts as no answer.
#[must_use]
pub fn parse_response(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use drill_core::model::{MaxFactor, PackSize, PracticeConfig};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn started() -> SessionController {
        let config = PracticeConfig::new(MaxFactor::new(12).unwrap(), PackSize::Ten);
        let mut session = SessionController::new(config);
        session.start_with(&mut StdRng::seed_from_u64(5)).unwrap();
        session
    }

    #[test]
    fn configuring_without_pack_has_no_vm() {
        let session = SessionController::new(PracticeConfig::default());
        assert!(map_practice(&session).is_none());
    }

    #[test]
    fn fresh_question_is_open_for_answers() {
        let session = started();
        let vm = map_practice(&session).unwrap();
        assert_eq!(vm.position_label, "Question 1/10");
        assert_eq!(vm.question_text, session.pack()[0].text());
        assert!(!vm.can_previous);
        assert!(vm.can_next);
        assert!(vm.can_submit);
        assert_eq!(vm.feedback, None);
        assert_eq!(vm.score_label, "Score: 0");
    }

    #[test]
    fn submitted_question_shows_feedback() {
        let mut session = started();
        session.next().unwrap();
        let answer = session.current_question().unwrap().correct_answer();
        session.submit(Some(answer)).unwrap();

        let vm = map_practice(&session).unwrap();
        assert_eq!(vm.position_label, "Question 2/10");
        assert_eq!(vm.submitted_response, Some(answer.to_string()));
        assert!(!vm.can_submit);
        assert_eq!(vm.feedback.map(|f| f.label), Some("Correct!"));
        assert_eq!(vm.score_label, "Score: 1");
    }

    #[test]
    fn parse_response_accepts_integers_only() {
        assert_eq!(parse_response(" 42 "), Some(42));
        assert_eq!(parse_response("-3"), Some(-3));
        assert_eq!(parse_response(""), None);
        assert_eq!(parse_response("4.5"), None);
        assert_eq!(parse_response("abc"), None);
    }
}
