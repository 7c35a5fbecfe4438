use std::sync::Arc;

use assess_core::model::{AnswerEvent, Level};
use assess_core::{Catalog, Clock};

use super::service::SessionService;
use crate::error::SessionError;

/// Result of answering the active question in a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionAnswerResult {
    pub event: AnswerEvent,
    pub level: Level,
    pub is_complete: bool,
}

/// Orchestrates session start and answering against the shared catalog.
///
/// Injects the clock so sessions stay deterministic under test; all state
/// lives in the `SessionService` handed back to the caller.
#[derive(Clone)]
pub struct AssessmentLoopService {
    clock: Clock,
    catalog: Arc<Catalog>,
}

impl AssessmentLoopService {
    #[must_use]
    pub fn new(clock: Clock, catalog: Arc<Catalog>) -> Self {
        Self { clock, catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    /// Start a new assessment session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` when the catalog holds no questions.
    pub fn start_session(&self) -> Result<SessionService, SessionError> {
        SessionService::new(Arc::clone(&self.catalog), self.clock.now())
    }

    /// Answer the active question with a raw submitted string.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveQuestion` when the current level's
    /// pool is empty, and `SessionError::Completed` when the session is
    /// already over.
    pub fn answer_current(
        &self,
        session: &mut SessionService,
        raw_answer: &str,
    ) -> Result<SessionAnswerResult, SessionError> {
        let question = session
            .active_question()
            .cloned()
            .ok_or(SessionError::NoActiveQuestion)?;

        let event = session.submit_answer(&question, raw_answer, self.clock.now())?;

        Ok(SessionAnswerResult {
            event,
            level: session.level(),
            is_complete: session.should_end(),
        })
    }

    /// End the session early on behalf of the caller.
    pub fn finish(&self, session: &mut SessionService) {
        session.finish(self.clock.now());
    }
}
