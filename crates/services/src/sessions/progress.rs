/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub answered: usize,
    pub quota: usize,
    pub remaining: usize,
    pub is_complete: bool,
}
