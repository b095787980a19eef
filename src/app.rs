use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::{AnalysisResponse, View};
use crate::services::{settings_service, AnalysisSession, ViewNavigator};
use crate::state::AppState;

/// Wires the navigator and the analysis session onto one shared state.
#[derive(Clone)]
pub struct App {
    state: AppState,
    navigator: ViewNavigator,
    session: AnalysisSession,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self {
            navigator: ViewNavigator::new(state.clone()),
            session: AnalysisSession::new(state.clone()),
            state,
        }
    }

    /// Load settings and open the dashboard. The two loads run side by side
    /// and neither failure blocks the other.
    pub async fn start(&self) -> Option<View> {
        let (settings, view) = tokio::join!(
            settings_service::load_settings(&self.state),
            self.navigator.activate(View::Dashboard)
        );
        if let Err(e) = settings {
            warn!("Settings load failed, using defaults: {}", e);
        }
        info!("Dashboard client started");
        view
    }

    /// Quick-pick chip: analyze `symbol` with the default model.
    pub async fn quick_pick(&self, symbol: &str) -> Result<Option<AnalysisResponse>, AppError> {
        let model = self.state.default_model.clone();
        self.session.run_analysis(symbol, &model).await
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn navigator(&self) -> &ViewNavigator {
        &self.navigator
    }

    pub fn session(&self) -> &AnalysisSession {
        &self.session
    }
}
