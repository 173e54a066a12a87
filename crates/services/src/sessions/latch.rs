/// Edge detector for "every question submitted".
///
/// `observe` returns `true` only on the transition from incomplete to
/// complete, so repeated observations of a finished pack raise nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionLatch {
    was_complete: bool,
}

impl CompletionLatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, is_complete: bool) -> bool {
        let fired = is_complete && !self.was_complete;
        self.was_complete = is_complete;
        fired
    }

    pub fn reset(&mut self) {
        self.was_complete = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_on_rising_edge() {
        let mut latch = CompletionLatch::new();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
        assert!(!latch.observe(true));
    }

    #[test]
    fn reset_rearms() {
        let mut latch = CompletionLatch::new();
        assert!(latch.observe(true));
        latch.reset();
        assert!(latch.observe(true));
    }
}
