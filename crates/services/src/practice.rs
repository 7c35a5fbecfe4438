use std::sync::Arc;

use assess_core::model::{Level, Question, QuestionId};
use assess_core::{Catalog, ChapterFilter};

/// Boundary access to the question bank for practice browsing.
///
/// Stateless over the shared catalog; every view preserves catalog order
/// and unknown filters come back empty, never as errors.
#[derive(Clone)]
pub struct PracticeService {
    catalog: Arc<Catalog>,
}

impl PracticeService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Distinct chapter labels in order of first appearance, for pickers.
    #[must_use]
    pub fn chapters(&self) -> Vec<String> {
        self.catalog.chapters()
    }

    /// Questions matching the chapter filter.
    #[must_use]
    pub fn questions_by_chapter(&self, filter: &ChapterFilter) -> Vec<Question> {
        self.catalog
            .questions_by_chapter(filter)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Questions at a given difficulty level.
    #[must_use]
    pub fn questions_by_level(&self, level: Level) -> Vec<Question> {
        self.catalog
            .questions_by_level(level)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Look one question up, e.g. to join a response log row back to its
    /// text.
    #[must_use]
    pub fn question(&self, id: QuestionId) -> Option<Question> {
        self.catalog.get(id).cloned()
    }
}
