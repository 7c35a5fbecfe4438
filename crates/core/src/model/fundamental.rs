use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a fundamental.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FundamentalError {
    #[error("unknown fundamental: {0}")]
    Unknown(String),
}

/// Cognitive skill category a question diagnostically targets.
///
/// Wrong answers are attributed to exactly one of these four categories.
/// The declaration order is also the fixed tie-break order used by the
/// recommendation ranker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fundamental {
    Listening,
    Grasping,
    Retention,
    Application,
}

impl Fundamental {
    /// All fundamentals in their fixed enumeration order.
    pub const ALL: [Fundamental; 4] = [
        Fundamental::Listening,
        Fundamental::Grasping,
        Fundamental::Retention,
        Fundamental::Application,
    ];

    /// Lowercase label, matching the catalog's on-disk vocabulary.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Fundamental::Listening => "listening",
            Fundamental::Grasping => "grasping",
            Fundamental::Retention => "retention",
            Fundamental::Application => "application",
        }
    }
}

impl fmt::Display for Fundamental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Fundamental {
    type Err = FundamentalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "listening" => Ok(Fundamental::Listening),
            "grasping" => Ok(Fundamental::Grasping),
            "retention" => Ok(Fundamental::Retention),
            "application" => Ok(Fundamental::Application),
            other => Err(FundamentalError::Unknown(other.to_string())),
        }
    }
}
