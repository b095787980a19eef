mod analysis;
mod dashboard;
mod news;
mod panels;
mod settings;
mod symbol;
mod view;

pub use analysis::{
    AiPrediction, Analysis, AnalysisResponse, AnalyzeRequest, Candle, Feedback, FeedbackRequest,
    IndicatorReadings, RiskManagement, TradingLevels,
};
pub use dashboard::{ActivityRow, AssetKind, DashboardStats, FeedbackStatus, HistoryRow};
pub use news::{
    NewsItem, Sentiment, SentimentBand, SentimentDistribution, SentimentReport,
    SENTIMENT_BAND_THRESHOLD,
};
pub use panels::{
    AnalysisView, ChartPoint, LevelsPanel, RiskPanel, SentimentContext, SentimentGauge,
};
pub use settings::UserSettings;
pub use symbol::{SymbolCategory, SymbolInfo};
pub use view::{View, ViewHeader};
