use serde::{Deserialize, Serialize};

/// Risk settings stored by the backend under `/api/settings`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default = "default_account_balance")]
    pub account_balance: f64,
    #[serde(default = "default_risk_per_trade_pct")]
    pub risk_per_trade_pct: f64,
    #[serde(default = "default_max_leverage")]
    pub max_leverage: u32,
}

fn default_account_balance() -> f64 {
    10_000.0
}

fn default_risk_per_trade_pct() -> f64 {
    1.0
}

fn default_max_leverage() -> u32 {
    10
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            account_balance: default_account_balance(),
            risk_per_trade_pct: default_risk_per_trade_pct(),
            max_leverage: default_max_leverage(),
        }
    }
}
