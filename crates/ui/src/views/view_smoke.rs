use super::test_harness::{SessionSeed, ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn login_view_smoke_lists_roster() {
    let mut harness = setup_view_harness(ViewKind::Login, SessionSeed::None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Choose Student"), "missing title in {html}");
    for name in ["Ram", "Shyam", "Sanga"] {
        assert!(html.contains(name), "missing {name} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_snapshot() {
    let mut harness = setup_view_harness(ViewKind::Home, SessionSeed::TwoMisses);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Responses: 2"), "missing count in {html}");
    assert!(html.contains("Grasping 1"), "missing diagnostics in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_view_smoke_shows_first_question() {
    let mut harness = setup_view_harness(ViewKind::Assessment, SessionSeed::Fresh);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Level: EASY"), "missing banner in {html}");
    assert!(html.contains("Question 1 of 6"), "missing progress in {html}");
    assert!(html.contains("60 km in 1 hour"), "missing question in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_lists_recommendations_and_chapters() {
    let mut harness = setup_view_harness(ViewKind::Practice, SessionSeed::TwoMisses);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Recommended based on diagnostics"),
        "missing recommendations in {html}"
    );
    assert!(html.contains("GRASPING"), "missing ranked skill in {html}");
    assert!(html.contains("Time &amp; Distance") || html.contains("Time & Distance"),
        "missing chapter in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_insights_and_log() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, SessionSeed::TwoMisses);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Key Insights"), "missing insights in {html}");
    assert!(
        html.contains("GRASPING: 1 flagged"),
        "missing top insight in {html}"
    );
    assert!(html.contains("Response Log"), "missing log in {html}");
    assert!(html.contains("No"), "missing wrong-answer row in {html}");
}
