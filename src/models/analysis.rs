use serde::{Deserialize, Serialize};

use super::news::NewsItem;

/// A stored analysis as returned by `/api/recent-analyses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub id: String,
    pub ticker: String,
    pub timestamp: String,
    #[serde(default)]
    pub model: Option<String>,
    pub trading_levels: TradingLevels,
    pub indicators: IndicatorReadings,
    #[serde(default)]
    pub ai_prediction: Option<AiPrediction>,
    #[serde(default)]
    pub feedback: Option<Feedback>,
    #[serde(default)]
    pub news: Option<Vec<NewsItem>>,
}

impl Analysis {
    pub fn is_veto(&self) -> bool {
        self.ai_prediction.as_ref().is_some_and(AiPrediction::is_veto)
    }

    /// Feedback that has actually been submitted; unsubmitted records count as none.
    pub fn submitted_feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref().filter(|f| f.submitted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradingLevels {
    pub entry: f64,
    pub take_profit: f64,
    pub stop_loss: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_sl: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partial_tp: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReadings {
    pub rsi: f64,
    pub htf_rsi: f64,
}

/// The model verdict: either a plain label or a structured decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AiPrediction {
    Decision {
        #[serde(default)]
        decision: String,
        #[serde(default)]
        reason: Option<String>,
    },
    Label(String),
}

impl AiPrediction {
    pub fn is_veto(&self) -> bool {
        matches!(self, AiPrediction::Decision { decision, .. } if decision == "veto")
    }

    /// Text shown as the verdict; `None` when the model gave nothing usable.
    pub fn verdict(&self) -> Option<&str> {
        let text = match self {
            AiPrediction::Label(label) => label.as_str(),
            AiPrediction::Decision { reason, .. } => reason.as_deref().unwrap_or(""),
        };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub submitted: bool,
    pub success: bool,
    #[serde(default)]
    pub remark: String,
}

/// Payload of `POST /api/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub ticker: String,
    pub model: String,
}

/// Response of `POST /api/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub analysis_id: Option<String>,
    pub ticker: String,
    pub trading_levels: TradingLevels,
    pub indicators: IndicatorReadings,
    #[serde(default)]
    pub ai_prediction: Option<AiPrediction>,
    #[serde(default)]
    pub candles: Vec<Candle>,
    #[serde(default)]
    pub news: Option<Vec<NewsItem>>,
    #[serde(default)]
    pub risk_management: Option<RiskManagement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskManagement {
    pub balance: f64,
    pub risk_amount: f64,
    pub recommended_units: f64,
    pub notional_value: f64,
    pub suggested_leverage: f64,
    pub risk_pct: f64,
}

/// Payload of `POST /api/feedback`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub analysis_id: String,
    pub success: bool,
    pub remark: String,
}
