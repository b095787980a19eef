//! Boundary to the UI layer. Implementations only present values; every
//! decision about what to show is made by the services.

mod console;

pub use console::ConsoleRenderer;

use async_trait::async_trait;

use crate::models::{ActivityRow, AnalysisView, DashboardStats, HistoryRow, UserSettings, View, ViewHeader};

/// A confirmation question put to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
}

#[async_trait]
pub trait Renderer: Send + Sync {
    /// `None` deactivates every view.
    fn set_active_view(&self, view: Option<View>);

    fn show_header(&self, header: ViewHeader);

    fn show_stats(&self, stats: &DashboardStats);

    /// An empty slice means "no activity yet".
    fn show_activity_feed(&self, rows: &[ActivityRow]);

    fn show_history_loading(&self);

    fn show_history(&self, rows: &[HistoryRow]);

    fn show_history_error(&self, message: &str);

    fn set_loading(&self, visible: bool);

    fn set_results_visible(&self, visible: bool);

    fn show_analysis(&self, view: &AnalysisView);

    fn show_settings(&self, settings: &UserSettings);

    fn notify(&self, message: &str);

    /// Blocking user-visible failure message.
    fn show_error(&self, message: &str);

    /// Resolves once the user answers this particular prompt.
    async fn confirm(&self, prompt: ConfirmPrompt) -> bool;
}
