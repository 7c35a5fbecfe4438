use chrono::{DateTime, Utc};

use crate::model::fundamental::Fundamental;
use crate::model::ids::QuestionId;

/// Record of a single submitted answer.
///
/// The fundamental is copied from the question at evaluation time, so the
/// event stays meaningful even if the caller later looks at a different
/// question. Events are appended to the session log and never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerEvent {
    pub question_id: QuestionId,
    pub correct: bool,
    pub fundamental: Fundamental,
    pub answered_at: DateTime<Utc>,
}

impl AnswerEvent {
    #[must_use]
    pub fn new(
        question_id: QuestionId,
        correct: bool,
        fundamental: Fundamental,
        answered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            question_id,
            correct,
            fundamental,
            answered_at,
        }
    }
}
