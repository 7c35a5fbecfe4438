//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by session services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("catalog has no questions to assess")]
    Empty,
    #[error("no question is active for the current level")]
    NoActiveQuestion,
    #[error("session already completed")]
    Completed,
}
