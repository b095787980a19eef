use async_trait::async_trait;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::errors::AppError;
use crate::models::{NewsItem, Sentiment, SentimentBand, SentimentDistribution, SentimentReport};

/// Assigns per-headline sentiment and an aggregate distribution.
#[async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    /// Returns an annotated copy of `news`; the input is left untouched.
    async fn analyze(&self, ticker: &str, news: &[NewsItem]) -> Result<SentimentReport, AppError>;
}

/// Placeholder analyzer that draws random sentiment until the backend
/// supplies real scores.
pub struct RandomSentimentAnalyzer {
    rng: Mutex<StdRng>,
}

impl RandomSentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Deterministic draws, for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomSentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SentimentAnalyzer for RandomSentimentAnalyzer {
    async fn analyze(&self, ticker: &str, news: &[NewsItem]) -> Result<SentimentReport, AppError> {
        let report = {
            let mut rng = self.rng.lock();
            synthesize(&mut *rng, ticker, news)
        };
        Ok(report)
    }
}

/// Label for one headline given the bias band and a uniform draw in [0, 1).
/// Biased bands split 60/20/20 towards their own label, the neutral band
/// splits 40/30/30.
pub fn label_for_draw(band: SentimentBand, r: f64) -> Sentiment {
    match band {
        SentimentBand::Bullish => {
            if r < 0.6 {
                Sentiment::Bullish
            } else if r < 0.8 {
                Sentiment::Neutral
            } else {
                Sentiment::Bearish
            }
        }
        SentimentBand::Bearish => {
            if r < 0.6 {
                Sentiment::Bearish
            } else if r < 0.8 {
                Sentiment::Neutral
            } else {
                Sentiment::Bullish
            }
        }
        SentimentBand::Neutral => {
            if r < 0.4 {
                Sentiment::Neutral
            } else if r < 0.7 {
                Sentiment::Bullish
            } else {
                Sentiment::Bearish
            }
        }
    }
}

/// Draw a base score in [-1, 1], band it, then label every headline.
/// Headlines that already carry a label keep it.
pub fn synthesize<R: Rng + ?Sized>(rng: &mut R, ticker: &str, news: &[NewsItem]) -> SentimentReport {
    let base_score = rng.random::<f64>() * 2.0 - 1.0;
    let band = SentimentBand::from_score(base_score);

    let mut distribution = SentimentDistribution {
        overall_score: base_score,
        bullish_count: 0,
        bearish_count: 0,
        neutral_count: 0,
    };

    let mut labeled = Vec::with_capacity(news.len());
    for item in news {
        let label = match item.sentiment {
            Some(existing) => existing,
            None => label_for_draw(band, rng.random::<f64>()),
        };
        match label {
            Sentiment::Bullish => distribution.bullish_count += 1,
            Sentiment::Bearish => distribution.bearish_count += 1,
            Sentiment::Neutral => distribution.neutral_count += 1,
        }
        labeled.push(NewsItem {
            sentiment: Some(label),
            ..item.clone()
        });
    }

    debug!(
        "Synthesized sentiment for {}: score {:.2}, {} bullish / {} bearish / {} neutral",
        ticker,
        base_score,
        distribution.bullish_count,
        distribution.bearish_count,
        distribution.neutral_count
    );

    SentimentReport {
        distribution,
        news: labeled,
    }
}
