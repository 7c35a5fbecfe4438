use thiserror::Error;

use crate::model::fundamental::Fundamental;
use crate::model::ids::QuestionId;
use crate::model::level::Level;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised while building a `Question`.
///
/// These indicate catalog data-integrity bugs and are surfaced at
/// construction time so a broken bank never reaches a session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("question text must not be empty")]
    EmptyText,

    #[error("question answer must not be empty")]
    EmptyAnswer,

    #[error("question chapter must not be empty")]
    EmptyChapter,
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// Immutable catalog entry: one question with its answer key and tags.
///
/// Created once at process start and never mutated. The canonical answer is
/// stored as written in the catalog; comparisons go through
/// [`Question::matches_answer`], which is case- and whitespace-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    level: Level,
    text: String,
    answer: String,
    fundamental: Fundamental,
    chapter: String,
}

impl Question {
    /// Build a question, validating the free-text fields.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if text, answer, or chapter is blank.
    pub fn new(
        id: QuestionId,
        level: Level,
        text: impl Into<String>,
        answer: impl Into<String>,
        fundamental: Fundamental,
        chapter: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        let answer = answer.into();
        if answer.trim().is_empty() {
            return Err(QuestionError::EmptyAnswer);
        }
        let chapter = chapter.into();
        if chapter.trim().is_empty() {
            return Err(QuestionError::EmptyChapter);
        }

        Ok(Self {
            id,
            level,
            text,
            answer,
            fundamental,
            chapter,
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn fundamental(&self) -> Fundamental {
        self.fundamental
    }

    #[must_use]
    pub fn chapter(&self) -> &str {
        &self.chapter
    }

    /// Judge a submitted answer against the canonical one.
    ///
    /// Both sides are normalized (trimmed, lowercased), so `" 60 "` matches
    /// `"60"` and `"Distance/Time"` matches `"distance/time"`.
    #[must_use]
    pub fn matches_answer(&self, raw: &str) -> bool {
        normalize_answer(raw) == normalize_answer(&self.answer)
    }
}

/// Normalization applied to both sides of an answer comparison.
#[must_use]
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_lowercase()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn build_question(answer: &str) -> Question {
        Question::new(
            QuestionId::new(1),
            Level::Easy,
            "If a car travels 60 km in 1 hour, what's its speed?",
            answer,
            Fundamental::Grasping,
            "Time & Distance",
        )
        .unwrap()
    }

    #[test]
    fn question_fails_if_text_empty() {
        let err = Question::new(
            QuestionId::new(1),
            Level::Easy,
            "   ",
            "60",
            Fundamental::Grasping,
            "Time & Distance",
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::EmptyText);
    }

    #[test]
    fn question_fails_if_answer_empty() {
        let err = Question::new(
            QuestionId::new(1),
            Level::Easy,
            "Q",
            " ",
            Fundamental::Grasping,
            "Time & Distance",
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::EmptyAnswer);
    }

    #[test]
    fn question_fails_if_chapter_empty() {
        let err = Question::new(
            QuestionId::new(1),
            Level::Easy,
            "Q",
            "60",
            Fundamental::Grasping,
            "",
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::EmptyChapter);
    }

    #[test]
    fn match_ignores_surrounding_whitespace() {
        let question = build_question("60");
        assert!(question.matches_answer(" 60 "));
        assert!(!question.matches_answer("61"));
    }

    #[test]
    fn match_ignores_case() {
        let question = build_question("distance/time");
        assert!(question.matches_answer("Distance/Time"));
    }

    #[test]
    fn match_normalizes_canonical_side_too() {
        let question = build_question(" Weighted ");
        assert!(question.matches_answer("weighted"));
    }
}
