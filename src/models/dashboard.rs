use serde::{Deserialize, Serialize};

use super::analysis::Analysis;

/// Summary widgets on the dashboard. Recomputed from the history on every
/// activation, never cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_analyses: usize,
    pub win_rate_pct: u32,
    pub veto_rate_pct: u32,
    /// Presentation proxy, not trade P&L.
    pub total_r: f64,
}

/// Outcome state of an analysis as far as user feedback goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStatus {
    Pending,
    Won,
    Lost,
}

impl FeedbackStatus {
    pub fn of(analysis: &Analysis) -> Self {
        match analysis.submitted_feedback() {
            None => FeedbackStatus::Pending,
            Some(f) if f.success => FeedbackStatus::Won,
            Some(_) => FeedbackStatus::Lost,
        }
    }

    pub fn feed_label(&self) -> &'static str {
        match self {
            FeedbackStatus::Pending => "Pending",
            FeedbackStatus::Won => "+ Profit",
            FeedbackStatus::Lost => "- Loss",
        }
    }

    pub fn history_label(&self) -> &'static str {
        match self {
            FeedbackStatus::Pending => "Awaiting feedback",
            FeedbackStatus::Won => "Won",
            FeedbackStatus::Lost => "Lost",
        }
    }
}

/// Instrument family, inferred from ticker shape for the feed icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Crypto,
    Market,
}

impl AssetKind {
    pub fn of_ticker(ticker: &str) -> Self {
        if ticker.contains('-') {
            AssetKind::Crypto
        } else {
            AssetKind::Market
        }
    }
}

/// One row of the dashboard activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRow {
    pub id: String,
    pub ticker: String,
    pub timestamp: String,
    pub asset: AssetKind,
    pub status: FeedbackStatus,
    pub entry_text: String,
}

impl From<&Analysis> for ActivityRow {
    fn from(a: &Analysis) -> Self {
        Self {
            id: a.id.clone(),
            ticker: a.ticker.clone(),
            timestamp: a.timestamp.clone(),
            asset: AssetKind::of_ticker(&a.ticker),
            status: FeedbackStatus::of(a),
            entry_text: format!("${:.1}", a.trading_levels.entry),
        }
    }
}

/// One card of the history view. Pending rows expose win/loss actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub id: String,
    pub ticker: String,
    pub timestamp: String,
    pub entry_text: String,
    pub take_profit_text: String,
    pub stop_loss_text: String,
    pub status: FeedbackStatus,
}

impl HistoryRow {
    pub fn accepts_feedback(&self) -> bool {
        self.status == FeedbackStatus::Pending
    }
}

impl From<&Analysis> for HistoryRow {
    fn from(a: &Analysis) -> Self {
        Self {
            id: a.id.clone(),
            ticker: a.ticker.clone(),
            timestamp: a.timestamp.clone(),
            entry_text: format!("E: {:.1}", a.trading_levels.entry),
            take_profit_text: format!("T: {:.1}", a.trading_levels.take_profit),
            stop_loss_text: format!("S: {:.1}", a.trading_levels.stop_loss),
            status: FeedbackStatus::of(a),
        }
    }
}
