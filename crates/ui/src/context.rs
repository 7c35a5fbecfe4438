use std::sync::Arc;

use services::{AssessmentLoopService, PracticeService};

/// Acting student, chosen at the mock login step.
///
/// Identity is presentation-only: the engine is single-session and
/// user-agnostic, so nothing below the UI ever sees this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: String,
    pub name: String,
}

impl Student {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

pub trait UiApp: Send + Sync {
    fn roster(&self) -> Vec<Student>;

    fn assessment_loop(&self) -> Arc<AssessmentLoopService>;
    fn practice(&self) -> Arc<PracticeService>;
}

#[derive(Clone)]
pub struct AppContext {
    roster: Vec<Student>,

    assessment_loop: Arc<AssessmentLoopService>,
    practice: Arc<PracticeService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            roster: app.roster(),
            assessment_loop: app.assessment_loop(),
            practice: app.practice(),
        }
    }

    #[must_use]
    pub fn roster(&self) -> &[Student] {
        &self.roster
    }

    #[must_use]
    pub fn assessment_loop(&self) -> Arc<AssessmentLoopService> {
        Arc::clone(&self.assessment_loop)
    }

    #[must_use]
    pub fn practice(&self) -> Arc<PracticeService> {
        Arc::clone(&self.practice)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
