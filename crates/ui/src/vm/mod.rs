mod dashboard_vm;
mod practice_vm;
mod session_vm;

pub use dashboard_vm::{
    ChartBarVm, InsightVm, ResponseRowVm, insights_for, map_chart_bars, map_insights,
    map_response_rows,
};
pub use practice_vm::{
    CHAPTER_ALL, PracticeQuestionVm, RecommendationVm, filter_from_choice, map_practice_question,
    map_recommendation,
};
pub use session_vm::{
    AnswerFeedback, FEEDBACK_PAUSE_MS, QuestionCardVm, level_banner, map_question_card,
    progress_line,
};
