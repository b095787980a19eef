use chrono::NaiveDate;
use tracing::warn;

use crate::models::{
    AnalysisResponse, AnalysisView, Candle, ChartPoint, LevelsPanel, RiskManagement, RiskPanel,
    SentimentReport,
};
use crate::services::alignment_service;

const NO_VERDICT: &str = "No verdict";

/// Calendar date of a candle timestamp such as `2025-01-10 00:00:00`;
/// the time of day is dropped.
pub fn date_key(timestamp: &str) -> Option<NaiveDate> {
    let date_part = timestamp.split([' ', 'T']).next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

pub fn chart_series(candles: &[Candle]) -> Vec<ChartPoint> {
    candles
        .iter()
        .filter_map(|c| match date_key(&c.timestamp) {
            Some(time) => Some(ChartPoint {
                time,
                open: c.open,
                high: c.high,
                low: c.low,
                close: c.close,
            }),
            None => {
                warn!("Skipping candle with unparsable timestamp '{}'", c.timestamp);
                None
            }
        })
        .collect()
}

pub fn levels_panel(response: &AnalysisResponse) -> LevelsPanel {
    let levels = &response.trading_levels;
    let verdict = response
        .ai_prediction
        .as_ref()
        .and_then(|p| p.verdict())
        .unwrap_or(NO_VERDICT);

    LevelsPanel {
        entry: format!("${:.2}", levels.entry),
        take_profit: format!("${:.2}", levels.take_profit),
        stop_loss: format!("${:.2}", levels.stop_loss),
        rsi: format!("{:.1} / {:.1}", response.indicators.rsi, response.indicators.htf_rsi),
        verdict: verdict.to_string(),
    }
}

pub fn risk_panel(risk: Option<&RiskManagement>) -> Option<RiskPanel> {
    let risk = risk?;
    let units_precision: usize = if risk.recommended_units < 1.0 { 4 } else { 2 };

    Some(RiskPanel {
        risk_amount: format!("${:.2}", risk.risk_amount),
        risk_share: format!("{}% of account", risk.risk_pct),
        recommended_units: format!("{:.*}", units_precision, risk.recommended_units),
        notional_value: format!("${:.2}", risk.notional_value),
        leverage: format!("x{:.1}", risk.suggested_leverage),
    })
}

/// Assemble the results section from a response and its sentiment report.
pub fn build_analysis_view(response: &AnalysisResponse, report: &SentimentReport) -> AnalysisView {
    AnalysisView {
        ticker: response.ticker.clone(),
        levels: levels_panel(response),
        chart: chart_series(&response.candles),
        news: report.news.clone(),
        gauge: alignment_service::gauge(&report.distribution),
        context: alignment_service::classify(&report.distribution),
        risk: risk_panel(response.risk_management.as_ref()),
    }
}
