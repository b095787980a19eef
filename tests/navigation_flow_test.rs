mod common;

use std::sync::atomic::Ordering;

use common::{analysis, harness, with_feedback, with_veto, Rendered};
use signal_dashboard::models::{DashboardStats, View};
use signal_dashboard::services::ViewNavigator;
use signal_dashboard::App;

fn sample_history() -> Vec<signal_dashboard::models::Analysis> {
    vec![
        with_feedback(analysis("a1", "AAPL", 100.0, 110.0), true),
        with_feedback(analysis("a2", "BTC-USD", 50_000.0, 55_000.0), false),
        with_veto(analysis("a3", "TSLA", 200.0, 220.0)),
        analysis("a4", "MSFT", 400.0, 420.0),
    ]
}

#[tokio::test]
async fn test_switch_to_history_activates_exactly_one_view() {
    let h = harness(sample_history());
    let navigator = ViewNavigator::new(h.state.clone());

    let view = navigator.switch_view("history").await;

    assert_eq!(view, Some(View::History));
    assert_eq!(navigator.active(), Some(View::History));
    assert_eq!(h.backend.history_fetches(), 1);

    let events = h.renderer.events();
    assert_eq!(events[0], Rendered::ActiveView(Some(View::History)));
    assert_eq!(events[1], Rendered::Header("History"));
    // First load shows the placeholder before the rows.
    assert_eq!(events[2], Rendered::HistoryLoading);
    match &events[3] {
        Rendered::History(rows) => {
            assert_eq!(rows.len(), 4);
            assert_eq!(rows[0].id, "a1");
            assert!(rows[3].accepts_feedback());
        }
        other => panic!("expected history rows, got {:?}", other),
    }
    assert_eq!(h.state.ui.read().history.len(), 4);
}

#[tokio::test]
async fn test_second_history_load_skips_placeholder() {
    let h = harness(sample_history());
    let navigator = ViewNavigator::new(h.state.clone());

    navigator.switch_view("history").await;
    h.renderer.clear();
    navigator.switch_view("history").await;

    assert_eq!(h.renderer.count(|e| matches!(e, Rendered::HistoryLoading)), 0);
    assert_eq!(h.backend.history_fetches(), 2);
}

#[tokio::test]
async fn test_unknown_view_leaves_none_active() {
    let h = harness(sample_history());
    let navigator = ViewNavigator::new(h.state.clone());

    let view = navigator.switch_view("portfolio").await;

    assert_eq!(view, None);
    assert_eq!(navigator.active(), None);
    assert_eq!(h.renderer.events(), vec![Rendered::ActiveView(None)]);
    assert_eq!(h.backend.history_fetches(), 0);
}

#[tokio::test]
async fn test_view_names_are_case_sensitive() {
    let h = harness(Vec::new());
    let navigator = ViewNavigator::new(h.state.clone());

    assert_eq!(navigator.switch_view("History").await, None);
    assert_eq!(navigator.active(), None);
}

#[tokio::test]
async fn test_analyze_and_settings_views_fetch_nothing() {
    let h = harness(sample_history());
    let navigator = ViewNavigator::new(h.state.clone());

    assert_eq!(navigator.switch_view("analyze").await, Some(View::Analyze));
    assert_eq!(navigator.switch_view("settings").await, Some(View::Settings));

    assert_eq!(h.backend.history_fetches(), 0);
    assert_eq!(
        h.renderer.events(),
        vec![
            Rendered::ActiveView(Some(View::Analyze)),
            Rendered::Header("Market Analysis"),
            Rendered::ActiveView(Some(View::Settings)),
            Rendered::Header("Settings"),
        ]
    );
}

#[tokio::test]
async fn test_dashboard_renders_stats_and_feed() {
    let h = harness(sample_history());
    let navigator = ViewNavigator::new(h.state.clone());

    navigator.activate(View::Dashboard).await;

    let expected = DashboardStats {
        total_analyses: 4,
        win_rate_pct: 50,
        veto_rate_pct: 25,
        // (110/100 - 1) * 10 = 1.0 for the win, -1 for the loss, halved.
        total_r: 0.0,
    };
    assert_eq!(h.state.ui.read().stats, expected);
    assert!(h.renderer.events().contains(&Rendered::Stats(expected)));

    let feed = h
        .renderer
        .events()
        .into_iter()
        .find_map(|e| match e {
            Rendered::Feed(rows) => Some(rows),
            _ => None,
        })
        .expect("feed rendered");
    assert_eq!(feed.len(), 4);
    assert_eq!(feed[0].entry_text, "$100.0");
    assert_eq!(feed[1].status.feed_label(), "- Loss");
    assert_eq!(feed[3].status.feed_label(), "Pending");
}

#[tokio::test]
async fn test_stats_failure_keeps_last_known_stats() {
    let h = harness(sample_history());
    let navigator = ViewNavigator::new(h.state.clone());

    navigator.activate(View::Dashboard).await;
    let before = h.state.ui.read().stats;
    h.renderer.clear();

    h.backend.fail_history.store(true, Ordering::SeqCst);
    let view = navigator.activate(View::Dashboard).await;

    assert_eq!(view, Some(View::Dashboard));
    assert_eq!(h.state.ui.read().stats, before);
    assert_eq!(h.renderer.count(|e| matches!(e, Rendered::Stats(_))), 0);
}

#[tokio::test]
async fn test_history_failure_shows_error_state() {
    let h = harness(Vec::new());
    h.backend.fail_history.store(true, Ordering::SeqCst);
    let navigator = ViewNavigator::new(h.state.clone());

    navigator.switch_view("history").await;

    assert_eq!(navigator.active(), Some(View::History));
    assert_eq!(
        h.renderer.count(|e| matches!(e, Rendered::HistoryError(_))),
        1
    );
    assert_eq!(h.renderer.count(|e| matches!(e, Rendered::History(_))), 0);
}

#[tokio::test]
async fn test_app_start_loads_settings_and_dashboard() {
    let h = harness(sample_history());
    h.backend.settings.lock().account_balance = 25_000.0;
    let app = App::new(h.state.clone());

    let view = app.start().await;

    assert_eq!(view, Some(View::Dashboard));
    assert_eq!(h.state.ui.read().settings.account_balance, 25_000.0);
    assert_eq!(h.state.ui.read().stats.total_analyses, 4);
    assert_eq!(h.renderer.count(|e| matches!(e, Rendered::Settings(_))), 1);
}

#[tokio::test]
async fn test_app_start_survives_settings_failure() {
    let h = harness(sample_history());
    h.backend.fail_settings.store(true, Ordering::SeqCst);
    let app = App::new(h.state.clone());

    let view = app.start().await;

    assert_eq!(view, Some(View::Dashboard));
    assert_eq!(h.state.ui.read().settings.account_balance, 10_000.0);
    assert_eq!(h.state.ui.read().stats.total_analyses, 4);
}
