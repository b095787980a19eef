use tracing::{debug, warn};

use crate::errors::AppError;
use crate::models::{ActivityRow, Analysis, DashboardStats, Feedback};
use crate::state::AppState;

/// Number of entries in the dashboard activity feed.
pub const FEED_SIZE: usize = 5;

/// Stats plus the newest `FEED_SIZE` entries. The history is expected
/// newest-first and is not re-sorted here.
pub fn aggregate(history: &[Analysis]) -> (DashboardStats, &[Analysis]) {
    aggregate_with_feed(history, FEED_SIZE)
}

pub fn aggregate_with_feed(history: &[Analysis], feed_size: usize) -> (DashboardStats, &[Analysis]) {
    let feed = &history[..history.len().min(feed_size)];
    (compute_stats(history), feed)
}

pub fn compute_stats(history: &[Analysis]) -> DashboardStats {
    let feedbacks: Vec<(&Analysis, &Feedback)> = history
        .iter()
        .filter_map(|a| a.submitted_feedback().map(|f| (a, f)))
        .collect();

    let wins = feedbacks.iter().filter(|(_, f)| f.success).count();
    let vetoes = history.iter().filter(|a| a.is_veto()).count();

    let raw_r: f64 = feedbacks.iter().map(|(a, f)| reward_proxy(a, f)).sum();

    DashboardStats {
        total_analyses: history.len(),
        win_rate_pct: rounded_pct(wins, feedbacks.len()),
        veto_rate_pct: rounded_pct(vetoes, history.len()),
        total_r: round_one_decimal(raw_r * 0.5),
    }
}

/// Cosmetic reward proxy: ten times the take-profit distance on a win,
/// minus one on a loss. Not a P&L figure.
fn reward_proxy(analysis: &Analysis, feedback: &Feedback) -> f64 {
    if !feedback.success {
        return -1.0;
    }

    let levels = &analysis.trading_levels;
    if levels.entry <= 0.0 {
        warn!("Analysis {} has non-positive entry {}, excluded from total R", analysis.id, levels.entry);
        return 0.0;
    }
    (levels.take_profit / levels.entry - 1.0) * 10.0
}

/// Whole percent, halves rounded up; 0 for an empty denominator.
fn rounded_pct(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

/// One decimal, rounding the exact value of `value` with halves away from
/// zero. The `* 10` product can itself round onto a half, so the exact
/// remainder of that product decides the direction in that case.
fn round_one_decimal(value: f64) -> f64 {
    let scaled = value * 10.0;
    let remainder = value.mul_add(10.0, -scaled);
    let scaled = if scaled.fract().abs() == 0.5 && remainder != 0.0 {
        if remainder > 0.0 {
            scaled.ceil()
        } else {
            scaled.floor()
        }
    } else {
        scaled.round()
    };
    let rounded = scaled / 10.0;
    // collapse -0.0
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Fetch the history, recompute the stats and render the dashboard widgets.
/// On failure the last rendered stats stay on screen.
pub async fn refresh_stats(state: &AppState) -> Result<DashboardStats, AppError> {
    let history = state.backend.fetch_recent_analyses().await?;

    let (stats, feed) = aggregate_with_feed(&history, state.feed_size);
    let rows: Vec<ActivityRow> = feed.iter().map(ActivityRow::from).collect();
    debug!(
        "Dashboard stats: {} analyses, {}% win rate, {}% veto rate, {} R",
        stats.total_analyses, stats.win_rate_pct, stats.veto_rate_pct, stats.total_r
    );

    state.renderer.show_stats(&stats);
    state.renderer.show_activity_feed(&rows);

    let mut ui = state.ui.write();
    ui.stats = stats;
    ui.history = history;

    Ok(stats)
}
