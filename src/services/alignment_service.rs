use crate::models::{SentimentBand, SentimentContext, SentimentDistribution, SentimentGauge};

/// Context box for the distribution's overall score. Banding is the same
/// `SentimentBand::from_score` the synthesizer uses.
pub fn classify(distribution: &SentimentDistribution) -> SentimentContext {
    let band = SentimentBand::from_score(distribution.overall_score);
    match band {
        SentimentBand::Bullish => SentimentContext {
            band,
            title: "📈 Sentiment aligned".to_string(),
            subtitle: format!(
                "{} bullish headlines support the analysis",
                distribution.bullish_count
            ),
            warning: false,
        },
        SentimentBand::Bearish => SentimentContext {
            band,
            title: "📉 Negative sentiment detected".to_string(),
            subtitle: format!(
                "{} bearish headlines indicate caution",
                distribution.bearish_count
            ),
            warning: true,
        },
        SentimentBand::Neutral => SentimentContext {
            band,
            title: "➖ Neutral sentiment".to_string(),
            subtitle: "News sentiment is balanced".to_string(),
            warning: false,
        },
    }
}

/// Gauge values: score in [-1, 1] mapped to a 0–100 fill.
pub fn gauge(distribution: &SentimentDistribution) -> SentimentGauge {
    let score = distribution.overall_score;
    SentimentGauge {
        score_text: format!("{:.2}", score),
        fill_pct: (score + 1.0) / 2.0 * 100.0,
        band: SentimentBand::from_score(score),
        bullish_count: distribution.bullish_count,
        bearish_count: distribution.bearish_count,
        neutral_count: distribution.neutral_count,
    }
}
