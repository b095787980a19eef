use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::models::{FeedbackRequest, HistoryRow};
use crate::render::ConfirmPrompt;
use crate::services::stats_service;
use crate::state::AppState;

/// Fetch the history and re-render the history view. The in-memory list is
/// replaced wholesale, so the last response wins.
pub async fn refresh_history(state: &AppState) -> Result<Vec<HistoryRow>, AppError> {
    // Only show the placeholder on first load to avoid flicker.
    if state.ui.read().history.is_empty() {
        state.renderer.show_history_loading();
    }

    let history = match state.backend.fetch_recent_analyses().await {
        Ok(history) => history,
        Err(e) => {
            state.renderer.show_history_error(&e.user_message());
            return Err(e);
        }
    };

    let rows: Vec<HistoryRow> = history.iter().map(HistoryRow::from).collect();
    state.ui.write().history = history;
    state.renderer.show_history(&rows);

    Ok(rows)
}

/// Record a win or loss for an analysis, then refresh history and stats.
pub async fn submit_feedback(state: &AppState, analysis_id: &str, success: bool) -> Result<(), AppError> {
    let request = FeedbackRequest {
        analysis_id: analysis_id.to_string(),
        success,
        remark: String::new(),
    };
    if let Err(e) = state.backend.submit_feedback(&request).await {
        error!("Feedback for {} failed: {}", analysis_id, e);
        state.renderer.show_error(&format!("Feedback failed: {}", e.user_message()));
        return Err(e);
    }
    info!("Feedback recorded for {} (success={})", analysis_id, success);

    refresh_after_change(state).await;
    Ok(())
}

/// Ask for confirmation, then delete. Returns `Ok(false)` when the user
/// declines.
pub async fn delete_analysis(state: &AppState, analysis_id: &str) -> Result<bool, AppError> {
    let prompt = ConfirmPrompt {
        title: "Delete analysis".to_string(),
        message: "Do you really want to permanently remove this analysis from the history?".to_string(),
        confirm_label: "Delete".to_string(),
    };
    if !state.renderer.confirm(prompt).await {
        info!("Deletion of {} cancelled", analysis_id);
        return Ok(false);
    }

    if let Err(e) = state.backend.delete_analysis(analysis_id).await {
        error!("Deleting {} failed: {}", analysis_id, e);
        state.renderer.show_error(&format!("Delete failed: {}", e.user_message()));
        return Err(e);
    }
    info!("Deleted analysis {}", analysis_id);

    refresh_after_change(state).await;
    Ok(true)
}

async fn refresh_after_change(state: &AppState) {
    let (history, stats) = tokio::join!(
        refresh_history(state),
        stats_service::refresh_stats(state)
    );
    if let Err(e) = history {
        warn!("History refresh failed: {}", e);
    }
    if let Err(e) = stats {
        warn!("Stats refresh failed: {}", e);
    }
}
