#![forbid(unsafe_code)]

pub mod error;
pub mod practice;
pub mod sessions;

pub use assess_core::Clock;

pub use error::SessionError;
pub use practice::PracticeService;
pub use sessions::{
    ANSWER_QUOTA, AssessmentLoopService, SessionAnswerResult, SessionProgress, SessionService,
};
