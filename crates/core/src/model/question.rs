use std::fmt;

/// Result shown next to a submitted question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerFeedback {
    Correct,
    Wrong,
}

impl AnswerFeedback {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AnswerFeedback::Correct => "Correct!",
            AnswerFeedback::Wrong => "Wrong!",
        }
    }

    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, AnswerFeedback::Correct)
    }
}

/// A single multiplication question within a practice pack.
///
/// Factors are fixed at creation; only the response and the submitted flag
/// change afterwards, and only once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    left: u32,
    right: u32,
    text: String,
    correct_answer: i64,
    user_response: Option<i64>,
    submitted: bool,
}

impl Question {
    #[must_use]
    pub fn new(left: u32, right: u32) -> Self {
        Self {
            left,
            right,
            text: format!("{left} x {right}"),
            correct_answer: i64::from(left) * i64::from(right),
            user_response: None,
            submitted: false,
        }
    }

    #[must_use]
    pub fn left(&self) -> u32 {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> u32 {
        self.right
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn correct_answer(&self) -> i64 {
        self.correct_answer
    }

    #[must_use]
    pub fn user_response(&self) -> Option<i64> {
        self.user_response
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// `None` until the question has been submitted.
    #[must_use]
    pub fn feedback(&self) -> Option<AnswerFeedback> {
        if !self.submitted {
            return None;
        }
        if self.user_response == Some(self.correct_answer) {
            Some(AnswerFeedback::Correct)
        } else {
            Some(AnswerFeedback::Wrong)
        }
    }

    /// Records the response and locks the question.
    ///
    /// Returns `None` without touching the question if it was already submitted.
    pub fn submit(&mut self, response: Option<i64>) -> Option<AnswerFeedback> {
        if self.submitted {
            return None;
        }
        self.user_response = response;
        self.submitted = true;
        self.feedback()
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
