mod answer;
mod diagnostics;
mod fundamental;
mod ids;
mod level;
mod question;

pub use answer::AnswerEvent;
pub use diagnostics::DiagnosticCounters;
pub use fundamental::{Fundamental, FundamentalError};
pub use ids::{ParseIdError, QuestionId};
pub use level::{Level, LevelError};
pub use question::{Question, QuestionError, normalize_answer};
