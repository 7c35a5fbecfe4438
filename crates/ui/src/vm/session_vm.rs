use assess_core::model::Level;
use services::SessionService;

/// Milliseconds the verdict stays on screen before the next question.
///
/// Purely presentational: the engine has already advanced by the time the
/// pause starts.
pub const FEEDBACK_PAUSE_MS: u64 = 700;

/// Display payload for the active question card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCardVm {
    pub heading: String,
    pub prompt: String,
}

/// Verdict shown after a submission, while the pause runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub prompt: String,
    pub correct: bool,
}

impl AnswerFeedback {
    #[must_use]
    pub fn verdict_label(&self) -> &'static str {
        if self.correct {
            "Correct ✓"
        } else {
            "Incorrect ✗"
        }
    }
}

/// Banner line for the quiz view, with the level upcased.
#[must_use]
pub fn level_banner(level: Level) -> String {
    format!(
        "Adaptive Assessment — Level: {}",
        level.label().to_uppercase()
    )
}

/// "Question N of M" progress line.
#[must_use]
pub fn progress_line(session: &SessionService) -> String {
    let progress = session.progress();
    format!("Question {} of {}", progress.answered + 1, progress.quota)
}

/// Map the session's active question for display, if the pool has one.
#[must_use]
pub fn map_question_card(session: &SessionService) -> Option<QuestionCardVm> {
    session.active_question().map(|question| QuestionCardVm {
        heading: format!("Question {}", session.answered_count() + 1),
        prompt: question.text().to_string(),
    })
}
