/// Payload of the one-time "practice finished" notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinishedNotice {
    score: usize,
    total: usize,
}

impl FinishedNotice {
    #[must_use]
    pub fn new(score: usize, total: usize) -> Self {
        Self { score, total }
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        "Practice finished"
    }

    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Your score is {} out of {} questions.",
            self.score, self.total
        )
    }
}
