use dioxus::prelude::*;

use services::SessionService;

use crate::context::Student;

/// Signed-in student, provided at the app root and set by the login view.
#[derive(Clone, Copy)]
pub struct SignedIn(pub Signal<Option<Student>>);

/// The active assessment session, shared across views.
///
/// The engine itself is a plain synchronous state object; this signal is the
/// UI-binding layer observing it. The quiz view mutates it, the home,
/// practice and dashboard views only read snapshots.
#[derive(Clone, Copy)]
pub struct ActiveSession(pub Signal<Option<SessionService>>);
