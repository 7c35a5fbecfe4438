use std::collections::HashSet;

use thiserror::Error;

use crate::model::{Fundamental, Level, Question, QuestionError, QuestionId};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised while assembling a catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate question id: {0}")]
    DuplicateId(QuestionId),

    #[error(transparent)]
    Question(#[from] QuestionError),
}

//
// ─── CHAPTER FILTER ────────────────────────────────────────────────────────────
//

/// Chapter selection for practice browsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChapterFilter {
    /// The entire catalog, unfiltered.
    All,
    /// Questions whose chapter label matches exactly.
    Chapter(String),
}

impl ChapterFilter {
    #[must_use]
    pub fn matches(&self, question: &Question) -> bool {
        match self {
            ChapterFilter::All => true,
            ChapterFilter::Chapter(chapter) => question.chapter() == chapter,
        }
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Immutable question bank, loaded once at process start.
///
/// All views preserve catalog order. Filters that match nothing yield empty
/// sequences, never errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    /// Build a catalog from a list of questions.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two questions share an id.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(CatalogError::DuplicateId(question.id()));
            }
        }
        Ok(Self { questions })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Every question, in catalog order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Look up one question by id.
    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// All questions at the given level, in catalog order.
    #[must_use]
    pub fn questions_by_level(&self, level: Level) -> Vec<&Question> {
        self.questions.iter().filter(|q| q.level() == level).collect()
    }

    /// All questions matching the chapter filter, in catalog order.
    #[must_use]
    pub fn questions_by_chapter(&self, filter: &ChapterFilter) -> Vec<&Question> {
        self.questions.iter().filter(|q| filter.matches(q)).collect()
    }

    /// Distinct chapter labels, in order of first appearance.
    #[must_use]
    pub fn chapters(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.questions
            .iter()
            .filter(|q| seen.insert(q.chapter()))
            .map(|q| q.chapter().to_string())
            .collect()
    }

    /// The built-in Time & Distance assessment bank.
    ///
    /// # Panics
    ///
    /// Panics if the static table is malformed, which would be a programming
    /// error caught by the accompanying test.
    #[must_use]
    pub fn builtin() -> Self {
        let rows: [(u64, Level, &str, &str, Fundamental, &str); 9] = [
            (
                1,
                Level::Easy,
                "If a car travels 60 km in 1 hour, what's its speed?",
                "60",
                Fundamental::Grasping,
                "Time & Distance",
            ),
            (
                2,
                Level::Easy,
                "A runner covers 5 km in 25 minutes. Average speed (km/h)?",
                "12",
                Fundamental::Application,
                "Time & Distance",
            ),
            (
                3,
                Level::Easy,
                "Teacher explains formula 'speed = distance/time' clearly",
                "true",
                Fundamental::Listening,
                "Concepts",
            ),
            (
                4,
                Level::Easy,
                "Recall: speed = ? (type 'distance/time')",
                "distance/time",
                Fundamental::Retention,
                "Formulae",
            ),
            (
                5,
                Level::Medium,
                "A train covers 180 km in 3 hours. Then another 90 km in 1 hour. Average speed for entire journey?",
                "67.5",
                Fundamental::Application,
                "Time & Distance",
            ),
            (
                6,
                Level::Medium,
                "If distance doubles and time halves, speed becomes?",
                "4x",
                Fundamental::Grasping,
                "Proportions",
            ),
            (
                7,
                Level::Medium,
                "You were asked a question and forgot the formula during revision. This indicates which issue? (listening/grasping/retention/application)",
                "retention",
                Fundamental::Retention,
                "Meta",
            ),
            (
                8,
                Level::Hard,
                "Two cars start from same point. Car A: 60 km/h, Car B: 40 km/h. After how long will A be 40 km ahead?",
                "2",
                Fundamental::Application,
                "Relative Speed",
            ),
            (
                9,
                Level::Hard,
                "Explain why average speed is NOT the arithmetic mean when distances are equal? (short) (answer: weighted)",
                "weighted",
                Fundamental::Grasping,
                "Conceptual",
            ),
        ];

        let questions = rows
            .into_iter()
            .map(|(id, level, text, answer, fundamental, chapter)| {
                Question::new(QuestionId::new(id), level, text, answer, fundamental, chapter)
            })
            .collect::<Result<Vec<_>, _>>()
            .expect("builtin catalog rows are valid");

        Self::from_questions(questions).expect("builtin catalog ids are unique")
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_well_formed() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.questions_by_level(Level::Easy).len(), 4);
        assert_eq!(catalog.questions_by_level(Level::Medium).len(), 3);
        assert_eq!(catalog.questions_by_level(Level::Hard).len(), 2);
    }

    #[test]
    fn level_view_preserves_catalog_order() {
        let catalog = Catalog::builtin();
        let ids: Vec<u64> = catalog
            .questions_by_level(Level::Easy)
            .iter()
            .map(|q| q.id().value())
            .collect();
        assert_eq!(ids, [1, 2, 3, 4]);
    }

    #[test]
    fn chapter_filter_all_returns_everything() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.questions_by_chapter(&ChapterFilter::All).len(),
            catalog.len()
        );
    }

    #[test]
    fn chapter_filter_selects_exact_label() {
        let catalog = Catalog::builtin();
        let filter = ChapterFilter::Chapter("Time & Distance".to_string());
        let ids: Vec<u64> = catalog
            .questions_by_chapter(&filter)
            .iter()
            .map(|q| q.id().value())
            .collect();
        assert_eq!(ids, [1, 2, 5]);
    }

    #[test]
    fn unknown_chapter_yields_empty_not_error() {
        let catalog = Catalog::builtin();
        let filter = ChapterFilter::Chapter("Algebra".to_string());
        assert!(catalog.questions_by_chapter(&filter).is_empty());
    }

    #[test]
    fn chapters_are_distinct_in_first_appearance_order() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.chapters(),
            [
                "Time & Distance",
                "Concepts",
                "Formulae",
                "Proportions",
                "Meta",
                "Relative Speed",
                "Conceptual",
            ]
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let question = |id| {
            Question::new(
                QuestionId::new(id),
                Level::Easy,
                "Q",
                "A",
                Fundamental::Grasping,
                "C",
            )
            .unwrap()
        };
        let err = Catalog::from_questions(vec![question(1), question(1)]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId(QuestionId::new(1)));
    }

    #[test]
    fn get_finds_question_by_id() {
        let catalog = Catalog::builtin();
        let question = catalog.get(QuestionId::new(8)).unwrap();
        assert_eq!(question.level(), Level::Hard);
        assert!(catalog.get(QuestionId::new(99)).is_none());
    }
}
