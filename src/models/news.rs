use serde::{Deserialize, Serialize};

/// Score above which news sentiment counts as bullish (and below whose
/// negation it counts as bearish).
pub const SENTIMENT_BAND_THRESHOLD: f64 = 0.2;

/// A single news headline attached to an analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub source: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
}

/// Sentiment label of a headline
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Bullish,
    Bearish,
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Bullish => write!(f, "bullish"),
            Sentiment::Bearish => write!(f, "bearish"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

/// Qualitative band of an aggregate score. Shared by the synthesizer and
/// the alignment panel so both always agree on the same score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SentimentBand {
    Bullish,
    Bearish,
    Neutral,
}

impl SentimentBand {
    pub fn from_score(score: f64) -> Self {
        if score > SENTIMENT_BAND_THRESHOLD {
            SentimentBand::Bullish
        } else if score < -SENTIMENT_BAND_THRESHOLD {
            SentimentBand::Bearish
        } else {
            SentimentBand::Neutral
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SentimentDistribution {
    pub overall_score: f64,
    pub bullish_count: usize,
    pub bearish_count: usize,
    pub neutral_count: usize,
}

impl SentimentDistribution {
    pub fn total(&self) -> usize {
        self.bullish_count + self.bearish_count + self.neutral_count
    }

    pub fn band(&self) -> SentimentBand {
        SentimentBand::from_score(self.overall_score)
    }
}

/// Distribution plus the news list annotated with per-item labels.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentReport {
    pub distribution: SentimentDistribution,
    pub news: Vec<NewsItem>,
}
