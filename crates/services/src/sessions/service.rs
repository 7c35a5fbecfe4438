use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

use assess_core::adapt;
use assess_core::model::{AnswerEvent, DiagnosticCounters, Level, Question};
use assess_core::recommend::{self, Recommendation};
use assess_core::Catalog;

use super::progress::SessionProgress;
use crate::error::SessionError;

/// Number of answered questions after which a session is over.
pub const ANSWER_QUOTA: usize = 6;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory state of one adaptive assessment run.
///
/// Owns the answer log, the difficulty level, the question cursor, and the
/// per-fundamental diagnostics for the lifetime of one session. Every
/// submission runs to completion before the next is accepted; there is no
/// partial mutation.
pub struct SessionService {
    catalog: Arc<Catalog>,
    level: Level,
    cursor: usize,
    events: Vec<AnswerEvent>,
    diagnostics: DiagnosticCounters,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl SessionService {
    /// Start a fresh session: level `easy`, cursor 0, empty log, zeroed
    /// diagnostics.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the catalog holds no questions at
    /// all; such a session could never produce an active question.
    pub fn new(catalog: Arc<Catalog>, started_at: DateTime<Utc>) -> Result<Self, SessionError> {
        if catalog.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            catalog,
            level: Level::Easy,
            cursor: 0,
            events: Vec::new(),
            diagnostics: DiagnosticCounters::new(),
            started_at,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Chronological answer log for this session.
    #[must_use]
    pub fn events(&self) -> &[AnswerEvent] {
        &self.events
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.events.len()
    }

    /// The catalog this session draws questions from.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The question the cursor currently points at, within the current
    /// level's pool.
    ///
    /// Returns `None` when the pool is empty; that is a legitimate state the
    /// caller displays, not an error. The cursor wraps with modulo, so a
    /// small pool recurs if the session lingers at one level.
    #[must_use]
    pub fn active_question(&self) -> Option<&Question> {
        let pool = self.catalog.questions_by_level(self.level);
        if pool.is_empty() {
            return None;
        }
        Some(pool[self.cursor % pool.len()])
    }

    /// Judge a submitted answer and fold it into the session.
    ///
    /// Normalizes the raw answer, appends the event, records a miss on a
    /// wrong answer, runs the level transition over the last two events, and
    /// advances the cursor by one. The returned event feeds UI feedback.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished.
    pub fn submit_answer(
        &mut self,
        question: &Question,
        raw_answer: &str,
        answered_at: DateTime<Utc>,
    ) -> Result<AnswerEvent, SessionError> {
        if self.should_end() {
            return Err(SessionError::Completed);
        }

        let correct = question.matches_answer(raw_answer);
        let event = AnswerEvent::new(question.id(), correct, question.fundamental(), answered_at);

        if !correct {
            self.diagnostics.record_miss(event.fundamental);
        }
        self.events.push(event.clone());
        self.level = adapt::next_level(self.level, &self.events);
        self.cursor += 1;

        if self.events.len() >= ANSWER_QUOTA {
            self.completed_at = Some(answered_at);
        }

        Ok(event)
    }

    /// Explicit early termination, e.g. "finish assessment early".
    ///
    /// Idempotent: finishing an already completed session keeps the original
    /// completion time.
    pub fn finish(&mut self, at: DateTime<Utc>) {
        if self.completed_at.is_none() {
            self.completed_at = Some(at);
        }
    }

    /// True once the quota is reached or the session was finished early.
    #[must_use]
    pub fn should_end(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Immutable copy of the per-fundamental mistake counters.
    #[must_use]
    pub fn diagnostics_snapshot(&self) -> DiagnosticCounters {
        self.diagnostics.snapshot()
    }

    /// Ranked remediation list derived from the current counters.
    #[must_use]
    pub fn recommendations(&self) -> Vec<Recommendation> {
        recommend::rank(&self.diagnostics)
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            answered: self.answered_count(),
            quota: ANSWER_QUOTA,
            remaining: ANSWER_QUOTA.saturating_sub(self.answered_count()),
            is_complete: self.should_end(),
        }
    }
}

impl fmt::Debug for SessionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionService")
            .field("level", &self.level)
            .field("cursor", &self.cursor)
            .field("events_len", &self.events.len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
