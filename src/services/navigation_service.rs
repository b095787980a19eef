use tracing::{debug, warn};

use crate::models::View;
use crate::services::{history_service, stats_service};
use crate::state::AppState;

/// Finite state machine over the dashboard views. Entering `history` or
/// `dashboard` refreshes that view's data; no other transition has effects.
#[derive(Clone)]
pub struct ViewNavigator {
    state: AppState,
}

impl ViewNavigator {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn active(&self) -> Option<View> {
        self.state.active_view()
    }

    /// Activate `target` by name. An unknown name leaves every view
    /// inactive and the header untouched.
    pub async fn switch_view(&self, target: &str) -> Option<View> {
        let view = target.parse::<View>().ok();
        if view.is_none() {
            warn!("Unknown view '{}', no view is active", target);
        }

        self.state.ui.write().active_view = view;
        self.state.renderer.set_active_view(view);

        let view = view?;
        debug!("Switched to {} view", view);
        self.state.renderer.show_header(view.header());

        match view {
            View::History => {
                if let Err(e) = history_service::refresh_history(&self.state).await {
                    warn!("History load failed: {}", e);
                }
            }
            View::Dashboard => {
                if let Err(e) = stats_service::refresh_stats(&self.state).await {
                    warn!("Stats failed, keeping last known dashboard: {}", e);
                }
            }
            View::Analyze | View::Settings => {}
        }

        Some(view)
    }

    pub async fn activate(&self, view: View) -> Option<View> {
        self.switch_view(view.as_str()).await
    }
}
