use rand::Rng;
use tracing::{debug, info};

use drill_core::model::{
    AnswerFeedback, FinishedNotice, MaxFactor, PackSize, PracticeConfig, Question,
};

use super::latch::CompletionLatch;
use super::pack::PackBuilder;
use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Configuring,
    Practicing,
}

/// Result of submitting an answer to the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub feedback: AnswerFeedback,
    /// Present only on the submit that completed the pack.
    pub finished: Option<FinishedNotice>,
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Single owner of the drill state.
///
/// Views read through the accessors and mutate only through the named
/// actions. Every action either applies fully or returns a `SessionError`
/// and leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionController {
    config: PracticeConfig,
    phase: SessionPhase,
    pack: Vec<Question>,
    current: usize,
    score: usize,
    latch: CompletionLatch,
    pending_notice: Option<FinishedNotice>,
}

impl SessionController {
    #[must_use]
    pub fn new(config: PracticeConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> PracticeConfig {
        self.config
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_practicing(&self) -> bool {
        self.phase == SessionPhase::Practicing
    }

    #[must_use]
    pub fn pack(&self) -> &[Question] {
        &self.pack
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.pack.get(self.current)
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Number of questions in the current pack.
    #[must_use]
    pub fn total(&self) -> usize {
        self.pack.len()
    }

    #[must_use]
    pub fn submitted_count(&self) -> usize {
        self.pack.iter().filter(|q| q.is_submitted()).count()
    }

    /// True once every question of a non-empty pack has been submitted.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !self.pack.is_empty() && self.pack.iter().all(Question::is_submitted)
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let submitted = self.submitted_count();
        SessionProgress {
            total: self.total(),
            submitted,
            remaining: self.total().saturating_sub(submitted),
            score: self.score,
            is_finished: self.is_finished(),
        }
    }

    #[must_use]
    pub fn can_next(&self) -> bool {
        self.is_practicing() && self.current + 1 < self.pack.len()
    }

    #[must_use]
    pub fn can_previous(&self) -> bool {
        self.is_practicing() && self.current > 0
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.is_practicing() && self.current_question().is_some_and(|q| !q.is_submitted())
    }

    /// The finished notice waiting to be shown, if any.
    #[must_use]
    pub fn finished_notice(&self) -> Option<FinishedNotice> {
        self.pending_notice
    }

    /// Hands out the pending finished notice once.
    pub fn take_finished_notice(&mut self) -> Option<FinishedNotice> {
        self.pending_notice.take()
    }

    //
    // ─── CONFIGURATION ─────────────────────────────────────────────────────────
    //

    /// # Errors
    ///
    /// Returns `SessionError::ConfigLocked` while practicing.
    pub fn set_max_factor(&mut self, max_factor: MaxFactor) -> Result<(), SessionError> {
        self.ensure_configuring()?;
        self.config = self.config.with_max_factor(max_factor);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SessionError::ConfigLocked` while practicing.
    pub fn increment_max_factor(&mut self) -> Result<MaxFactor, SessionError> {
        let next = self.config.max_factor().increment();
        self.set_max_factor(next)?;
        Ok(next)
    }

    /// # Errors
    ///
    /// Returns `SessionError::ConfigLocked` while practicing.
    pub fn decrement_max_factor(&mut self) -> Result<MaxFactor, SessionError> {
        let next = self.config.max_factor().decrement();
        self.set_max_factor(next)?;
        Ok(next)
    }

    /// # Errors
    ///
    /// Returns `SessionError::ConfigLocked` while practicing.
    pub fn set_pack_size(&mut self, pack_size: PackSize) -> Result<(), SessionError> {
        self.ensure_configuring()?;
        self.config = self.config.with_pack_size(pack_size);
        Ok(())
    }

    fn ensure_configuring(&self) -> Result<(), SessionError> {
        if self.is_practicing() {
            debug!("rejected config change while practicing");
            return Err(SessionError::ConfigLocked);
        }
        Ok(())
    }

    //
    // ─── SESSION ACTIONS ───────────────────────────────────────────────────────
    //

    /// Start a session with a pack drawn from the thread-local RNG.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyPracticing` outside the configuring phase.
    pub fn start(&mut self) -> Result<(), SessionError> {
        let mut rng = rand::rng();
        self.start_with(&mut rng)
    }

    /// Start a session with a pack drawn from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyPracticing` outside the configuring phase.
    /// Returns `SessionError::InvalidConfiguration` if generation fails.
    pub fn start_with<R: Rng>(&mut self, rng: &mut R) -> Result<(), SessionError> {
        if self.is_practicing() {
            debug!("rejected start: session already running");
            return Err(SessionError::AlreadyPracticing);
        }

        let pack = PackBuilder::new(self.config).build_with(rng)?;

        self.pack = pack;
        self.current = 0;
        self.score = 0;
        self.latch.reset();
        self.pending_notice = None;
        self.phase = SessionPhase::Practicing;

        info!(
            max_factor = self.config.max_factor().value(),
            pack_size = self.pack.len(),
            "practice session started"
        );
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SessionError::InvalidNavigation` on the last question or
    /// outside a session.
    pub fn next(&mut self) -> Result<usize, SessionError> {
        if !self.can_next() {
            debug!(index = self.current, "rejected next");
            return Err(self.invalid_navigation());
        }
        self.current += 1;
        Ok(self.current)
    }

    /// # Errors
    ///
    /// Returns `SessionError::InvalidNavigation` on the first question or
    /// outside a session.
    pub fn previous(&mut self) -> Result<usize, SessionError> {
        if !self.can_previous() {
            debug!(index = self.current, "rejected previous");
            return Err(self.invalid_navigation());
        }
        self.current -= 1;
        Ok(self.current)
    }

    fn invalid_navigation(&self) -> SessionError {
        SessionError::InvalidNavigation {
            index: self.current,
            total: self.pack.len(),
        }
    }

    /// Submit `response` for the current question.
    ///
    /// An absent response is recorded as a wrong answer.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotPracticing` outside a session and
    /// `SessionError::DoubleSubmission` if the question is already locked.
    pub fn submit(&mut self, response: Option<i64>) -> Result<SubmitOutcome, SessionError> {
        if !self.is_practicing() {
            debug!("rejected submit outside a session");
            return Err(SessionError::NotPracticing);
        }
        let index = self.current;
        let Some(question) = self.pack.get_mut(index) else {
            return Err(SessionError::NotPracticing);
        };
        let Some(feedback) = question.submit(response) else {
            debug!(index, "rejected double submission");
            return Err(SessionError::DoubleSubmission { index });
        };

        if feedback.is_correct() {
            self.score += 1;
        }

        let complete = self.is_finished();
        let finished = if self.latch.observe(complete) {
            let notice = FinishedNotice::new(self.score, self.pack.len());
            info!(score = notice.score(), total = notice.total(), "practice finished");
            self.pending_notice = Some(notice);
            Some(notice)
        } else {
            None
        };

        Ok(SubmitOutcome { feedback, finished })
    }

    /// Leave the session and return to the configuration form.
    ///
    /// The score stays readable until the next `start`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotPracticing` when no session is running.
    pub fn end(&mut self) -> Result<(), SessionError> {
        if !self.is_practicing() {
            debug!("rejected end outside a session");
            return Err(SessionError::NotPracticing);
        }
        self.phase = SessionPhase::Configuring;
        self.current = 0;
        self.pending_notice = None;
        info!(score = self.score, total = self.pack.len(), "practice session ended");
        Ok(())
    }

    /// Acknowledge the finished notice ("OK"), returning to configuration.
    pub fn dismiss_finished_notice(&mut self) -> Option<FinishedNotice> {
        let notice = self.pending_notice.take();
        if self.is_practicing() {
            self.phase = SessionPhase::Configuring;
            self.current = 0;
        }
        notice
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn config(max: u32, size: PackSize) -> PracticeConfig {
        PracticeConfig::new(MaxFactor::new(max).unwrap(), size)
    }

    fn started(max: u32, size: PackSize, seed: u64) -> SessionController {
        let mut session = SessionController::new(config(max, size));
        session
            .start_with(&mut StdRng::seed_from_u64(seed))
            .unwrap();
        session
    }

    #[test]
    fn new_controller_is_configuring_with_empty_pack() {
        let session = SessionController::new(PracticeConfig::default());
        assert_eq!(session.phase(), SessionPhase::Configuring);
        assert!(session.pack().is_empty());
        assert!(!session.is_finished());
        assert!(session.current_question().is_none());
        assert!(!session.can_submit());
    }

    #[test]
    fn start_enters_practicing_with_fresh_pack() {
        let session = started(7, PackSize::Ten, 3);
        assert_eq!(session.phase(), SessionPhase::Practicing);
        assert_eq!(session.total(), 10);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn start_twice_is_rejected() {
        let mut session = started(5, PackSize::Five, 3);
        let before = session.clone();
        assert_eq!(session.start(), Err(SessionError::AlreadyPracticing));
        assert_eq!(session, before);
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let mut session = started(5, PackSize::Five, 11);
        assert!(matches!(
            session.previous(),
            Err(SessionError::InvalidNavigation { index: 0, total: 5 })
        ));
        for expected in 1..5 {
            assert_eq!(session.next(), Ok(expected));
        }
        assert!(session.next().is_err());
        assert_eq!(session.current_index(), 4);
        assert_eq!(session.previous(), Ok(3));
    }

    #[test]
    fn navigation_outside_session_is_rejected() {
        let mut session = SessionController::new(PracticeConfig::default());
        assert!(session.next().is_err());
        assert!(session.previous().is_err());
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn second_submit_changes_nothing() {
        let mut session = started(9, PackSize::Five, 5);
        let answer = session.current_question().unwrap().correct_answer();
        let outcome = session.submit(Some(answer)).unwrap();
        assert_eq!(outcome.feedback, AnswerFeedback::Correct);
        assert_eq!(session.score(), 1);

        let before = session.clone();
        assert_eq!(
            session.submit(Some(answer + 1)),
            Err(SessionError::DoubleSubmission { index: 0 })
        );
        assert_eq!(session, before);
    }

    #[test]
    fn wrong_answer_does_not_score() {
        let mut session = started(12, PackSize::Ten, 8);
        let answer = session.current_question().unwrap().correct_answer();
        let outcome = session.submit(Some(answer + 1)).unwrap();
        assert_eq!(outcome.feedback, AnswerFeedback::Wrong);
        assert_eq!(outcome.finished, None);
        assert_eq!(session.score(), 0);
        assert!(!session.is_finished());
    }

    #[test]
    fn config_is_locked_while_practicing() {
        let mut session = started(5, PackSize::Five, 1);
        assert_eq!(session.set_pack_size(PackSize::Twenty), Err(SessionError::ConfigLocked));
        assert_eq!(session.increment_max_factor(), Err(SessionError::ConfigLocked));
        assert_eq!(session.config(), config(5, PackSize::Five));
    }

    #[test]
    fn stepper_changes_config_when_configuring() {
        let mut session = SessionController::new(PracticeConfig::default());
        assert_eq!(session.decrement_max_factor().unwrap().value(), 2);
        assert_eq!(session.increment_max_factor().unwrap().value(), 3);
        session.set_pack_size(PackSize::Twenty).unwrap();
        assert_eq!(session.config().pack_size(), PackSize::Twenty);
    }

    #[test]
    fn end_returns_to_configuring_and_keeps_score() {
        let mut session = started(4, PackSize::Five, 2);
        let answer = session.current_question().unwrap().correct_answer();
        session.submit(Some(answer)).unwrap();
        session.next().unwrap();

        session.end().unwrap();
        assert_eq!(session.phase(), SessionPhase::Configuring);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 1);
        assert_eq!(session.end(), Err(SessionError::NotPracticing));
    }

    #[test]
    fn dismissing_notice_returns_to_configuring() {
        let mut session = started(3, PackSize::Five, 4);
        for i in 0..5 {
            let answer = session.current_question().unwrap().correct_answer();
            session.submit(Some(answer)).unwrap();
            if i < 4 {
                session.next().unwrap();
            }
        }
        assert_eq!(session.finished_notice(), Some(FinishedNotice::new(5, 5)));

        let notice = session.dismiss_finished_notice();
        assert_eq!(notice, Some(FinishedNotice::new(5, 5)));
        assert_eq!(session.phase(), SessionPhase::Configuring);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.take_finished_notice(), None);
    }

    #[test]
    fn submit_outside_session_is_rejected() {
        let mut session = SessionController::new(PracticeConfig::default());
        assert_eq!(session.submit(Some(4)), Err(SessionError::NotPracticing));
    }
}
