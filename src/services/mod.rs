pub mod alignment_service;
pub mod analysis_session;
pub mod history_service;
pub mod navigation_service;
pub mod panel_service;
pub mod sentiment_service;
pub mod settings_service;
pub mod stats_service;
pub mod symbol_service;

pub use analysis_session::AnalysisSession;
pub use navigation_service::ViewNavigator;
pub use sentiment_service::{RandomSentimentAnalyzer, SentimentAnalyzer};
