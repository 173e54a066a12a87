/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub submitted: usize,
    pub remaining: usize,
    pub score: usize,
    pub is_finished: bool,
}
