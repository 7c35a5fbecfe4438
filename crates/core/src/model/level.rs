use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a difficulty level.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("unknown difficulty level: {0}")]
    Unknown(String),
}

/// Difficulty tier of a question, and of a running session.
///
/// Levels are totally ordered: `Easy < Medium < Hard`. Session transitions
/// only ever move one step at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

impl Level {
    /// One step harder, saturating at `Hard`.
    #[must_use]
    pub fn step_up(self) -> Self {
        match self {
            Level::Easy => Level::Medium,
            Level::Medium | Level::Hard => Level::Hard,
        }
    }

    /// One step easier, saturating at `Easy`.
    #[must_use]
    pub fn step_down(self) -> Self {
        match self {
            Level::Hard => Level::Medium,
            Level::Medium | Level::Easy => Level::Easy,
        }
    }

    /// Lowercase label, matching the catalog's on-disk vocabulary.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Level::Easy => "easy",
            Level::Medium => "medium",
            Level::Hard => "hard",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Level::Easy),
            "medium" => Ok(Level::Medium),
            "hard" => Ok(Level::Hard),
            other => Err(LevelError::Unknown(other.to_string())),
        }
    }
}
