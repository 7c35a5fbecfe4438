use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::ActiveSession;
use crate::vm::{insights_for, map_chart_bars, map_response_rows};

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<ActiveSession>().0;
    let practice = ctx.practice();

    let (counters, rows) = {
        let session = session.read();
        match session.as_ref() {
            Some(session) => (
                session.diagnostics_snapshot(),
                map_response_rows(session.events(), &practice),
            ),
            None => (Default::default(), Vec::new()),
        }
    };
    let bars = map_chart_bars(&counters);
    let insights = insights_for(&counters);

    rsx! {
        div { class: "card",
            h2 { "Diagnostic Dashboard" }
            div { class: "dashboard-columns",
                div { class: "dashboard-column",
                    h4 { "Fundamentals Chart" }
                    svg {
                        width: "260",
                        height: "200",
                        view_box: "0 0 260 200",
                        for bar in bars {
                            g {
                                rect {
                                    x: "{bar.x}",
                                    y: "{bar.rect_y}",
                                    width: "30",
                                    height: "{bar.height}",
                                    rx: "4",
                                }
                                text {
                                    x: "{bar.center_x}",
                                    y: "168",
                                    font_size: "11",
                                    text_anchor: "middle",
                                    "{bar.label}"
                                }
                                text {
                                    x: "{bar.center_x}",
                                    y: "{bar.value_y}",
                                    font_size: "10",
                                    text_anchor: "middle",
                                    "{bar.count}"
                                }
                            }
                        }
                    }
                }
                div { class: "dashboard-column",
                    h4 { "Key Insights" }
                    ol {
                        for insight in insights {
                            li { "{insight.text}" }
                        }
                    }
                    h4 { "Suggested Plan" }
                    ul {
                        li {
                            "2 sessions on "
                            strong { "Application" }
                            " problems (word problems)"
                        }
                        li {
                            "1 quick revision for "
                            strong { "Retention" }
                            " (flashcards)"
                        }
                        li {
                            "Teacher to check concept clarity for "
                            strong { "Grasping" }
                        }
                    }
                }
            }

            div { class: "response-log",
                h4 { "Response Log" }
                table { class: "log-table",
                    thead {
                        tr {
                            th { "Q" }
                            th { "Level" }
                            th { "Fundamental" }
                            th { "Correct" }
                        }
                    }
                    tbody {
                        for row in rows {
                            tr {
                                td { "{row.question_text}" }
                                td { "{row.level_label}" }
                                td { "{row.fundamental_label}" }
                                td { "{row.correct_label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
