use std::sync::Arc;

use parking_lot::RwLock;

use crate::external::BackendApi;
use crate::models::{Analysis, DashboardStats, UserSettings, View};
use crate::render::Renderer;
use crate::services::sentiment_service::SentimentAnalyzer;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn BackendApi>,
    pub sentiment: Arc<dyn SentimentAnalyzer>,
    pub renderer: Arc<dyn Renderer>,
    pub ui: Arc<RwLock<UiState>>,
    pub default_model: String,
    pub feed_size: usize,
}

impl AppState {
    pub fn new(
        backend: Arc<dyn BackendApi>,
        sentiment: Arc<dyn SentimentAnalyzer>,
        renderer: Arc<dyn Renderer>,
        default_model: String,
        feed_size: usize,
    ) -> Self {
        Self {
            backend,
            sentiment,
            renderer,
            ui: Arc::new(RwLock::new(UiState::default())),
            default_model,
            feed_size,
        }
    }

    pub fn active_view(&self) -> Option<View> {
        self.ui.read().active_view
    }
}

/// Mutable client state shared by the navigator and the services.
#[derive(Debug, Clone)]
pub struct UiState {
    /// `None` only after a switch to an unknown view.
    pub active_view: Option<View>,
    /// Last history fetched; replaced wholesale on every fetch.
    pub history: Vec<Analysis>,
    /// Last stats shown; kept when a refresh fails.
    pub stats: DashboardStats,
    pub settings: UserSettings,
    pub loading: bool,
    pub results_visible: bool,
    /// Bumped by every dispatched analysis; responses from older
    /// generations are dropped.
    pub analysis_generation: u64,
    pub last_analysis_id: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_view: Some(View::Dashboard),
            history: Vec::new(),
            stats: DashboardStats::default(),
            settings: UserSettings::default(),
            loading: false,
            results_visible: false,
            analysis_generation: 0,
            last_analysis_id: None,
        }
    }
}
