use tracing::{error, info};

use crate::errors::AppError;
use crate::models::UserSettings;
use crate::state::AppState;

/// Load settings into the state and the settings form. Defaults stay in
/// place when the backend is unreachable.
pub async fn load_settings(state: &AppState) -> Result<UserSettings, AppError> {
    let settings = state.backend.fetch_settings().await?;
    state.ui.write().settings = settings;
    state.renderer.show_settings(&settings);
    Ok(settings)
}

pub async fn save_settings(state: &AppState, settings: UserSettings) -> Result<(), AppError> {
    if !settings.account_balance.is_finite() || settings.account_balance <= 0.0 {
        return Err(AppError::Validation("account balance must be positive".to_string()));
    }
    if !(0.0..=100.0).contains(&settings.risk_per_trade_pct) {
        return Err(AppError::Validation("risk per trade must be between 0 and 100%".to_string()));
    }

    match state.backend.save_settings(&settings).await {
        Ok(()) => {
            state.ui.write().settings = settings;
            info!(
                "Settings saved: balance {:.2}, risk {}%",
                settings.account_balance, settings.risk_per_trade_pct
            );
            state.renderer.notify("Settings saved successfully!");
            Ok(())
        }
        Err(e) => {
            error!("Saving settings failed: {}", e);
            state.renderer.show_error(&format!("Saving failed: {}", e.user_message()));
            Err(e)
        }
    }
}
