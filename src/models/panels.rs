//! Presentation values handed to the renderer after an analysis completes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::news::{NewsItem, SentimentBand};

/// Candlestick point keyed by calendar date only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub time: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelsPanel {
    pub entry: String,
    pub take_profit: String,
    pub stop_loss: String,
    /// `rsi / htf_rsi`
    pub rsi: String,
    pub verdict: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentGauge {
    pub score_text: String,
    pub fill_pct: f64,
    pub band: SentimentBand,
    pub bullish_count: usize,
    pub bearish_count: usize,
    pub neutral_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentContext {
    pub band: SentimentBand,
    pub title: String,
    pub subtitle: String,
    pub warning: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPanel {
    pub risk_amount: String,
    pub risk_share: String,
    pub recommended_units: String,
    pub notional_value: String,
    pub leverage: String,
}

/// Everything the results section shows for one analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisView {
    pub ticker: String,
    pub levels: LevelsPanel,
    pub chart: Vec<ChartPoint>,
    pub news: Vec<NewsItem>,
    pub gauge: SentimentGauge,
    pub context: SentimentContext,
    /// `None` hides the risk box.
    pub risk: Option<RiskPanel>,
}
