use assess_core::model::{AnswerEvent, DiagnosticCounters};
use assess_core::recommend::{self, Recommendation};
use services::PracticeService;

/// Geometry for one bar of the fundamentals chart.
///
/// The chart is a 260x200 viewBox with four 30px bars on a fixed baseline;
/// heights scale against the largest counter (minimum 1 so empty charts
/// still lay out).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBarVm {
    pub label: String,
    pub count: u32,
    pub x: f64,
    pub rect_y: f64,
    pub height: f64,
    pub center_x: f64,
    pub value_y: f64,
}

/// One line of the dashboard's key-insights list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightVm {
    pub text: String,
}

/// One row of the response log table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseRowVm {
    pub question_text: String,
    pub level_label: String,
    pub fundamental_label: String,
    pub correct_label: &'static str,
}

#[must_use]
pub fn map_chart_bars(counters: &DiagnosticCounters) -> Vec<ChartBarVm> {
    let max = counters
        .iter()
        .map(|(_, count)| count)
        .max()
        .unwrap_or(0)
        .max(1);

    counters
        .iter()
        .enumerate()
        .map(|(i, (fundamental, count))| {
            let x = 20.0 + (i as f64) * 60.0;
            let height = f64::from(count) / f64::from(max) * 120.0;
            ChartBarVm {
                label: fundamental.label().to_string(),
                count,
                x,
                rect_y: 150.0 - height,
                height,
                center_x: x + 15.0,
                value_y: 140.0 - height,
            }
        })
        .collect()
}

#[must_use]
pub fn map_insights(ranked: &[Recommendation]) -> Vec<InsightVm> {
    ranked
        .iter()
        .map(|entry| InsightVm {
            text: format!(
                "{}: {} flagged — recommended targeted practice.",
                entry.fundamental.label().to_uppercase(),
                entry.miss_count
            ),
        })
        .collect()
}

/// Rank counters and map them in one go, for views that only need text.
#[must_use]
pub fn insights_for(counters: &DiagnosticCounters) -> Vec<InsightVm> {
    map_insights(&recommend::rank(counters))
}

/// Join answer events back to their questions for the response log.
#[must_use]
pub fn map_response_rows(events: &[AnswerEvent], practice: &PracticeService) -> Vec<ResponseRowVm> {
    events
        .iter()
        .map(|event| {
            let question = practice.question(event.question_id);
            ResponseRowVm {
                question_text: question
                    .as_ref()
                    .map(|q| q.text().to_string())
                    .unwrap_or_else(|| event.question_id.to_string()),
                level_label: question
                    .as_ref()
                    .map(|q| q.level().label().to_string())
                    .unwrap_or_default(),
                fundamental_label: event.fundamental.label().to_string(),
                correct_label: if event.correct { "Yes" } else { "No" },
            }
        })
        .collect()
}
