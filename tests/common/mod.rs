#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::StatusCode;
use tokio::sync::Notify;

use signal_dashboard::external::BackendApi;
use signal_dashboard::models::{
    ActivityRow, AiPrediction, Analysis, AnalysisResponse, AnalysisView, AnalyzeRequest, Candle,
    DashboardStats, Feedback, FeedbackRequest, HistoryRow, IndicatorReadings, NewsItem,
    TradingLevels, UserSettings, View,
};
use signal_dashboard::render::{ConfirmPrompt, Renderer};
use signal_dashboard::services::RandomSentimentAnalyzer;
use signal_dashboard::{AppError, AppState};

/// Ticker whose analysis blocks until `FakeBackend::release` is called.
pub const SLOW_TICKER: &str = "SLOW";

pub fn analysis(id: &str, ticker: &str, entry: f64, take_profit: f64) -> Analysis {
    Analysis {
        id: id.to_string(),
        ticker: ticker.to_string(),
        timestamp: "2025-01-10 14:30:00".to_string(),
        model: Some("test-model".to_string()),
        trading_levels: TradingLevels {
            entry,
            take_profit,
            stop_loss: entry * 0.95,
            trailing_sl: None,
            partial_tp: None,
        },
        indicators: IndicatorReadings { rsi: 52.0, htf_rsi: 58.5 },
        ai_prediction: Some(AiPrediction::Label("Long bias".to_string())),
        feedback: None,
        news: None,
    }
}

pub fn with_feedback(mut a: Analysis, success: bool) -> Analysis {
    a.feedback = Some(Feedback { submitted: true, success, remark: String::new() });
    a
}

pub fn with_veto(mut a: Analysis) -> Analysis {
    a.ai_prediction = Some(AiPrediction::Decision {
        decision: "veto".to_string(),
        reason: Some("Too extended".to_string()),
    });
    a
}

pub fn headline(title: &str) -> NewsItem {
    NewsItem {
        title: title.to_string(),
        source: "Bloomberg".to_string(),
        url: format!("https://news.example/{}", title),
        published: None,
        summary: None,
        sentiment: None,
    }
}

pub fn analysis_response(ticker: &str) -> AnalysisResponse {
    AnalysisResponse {
        analysis_id: Some(format!("{}-1", ticker.to_lowercase())),
        ticker: ticker.to_string(),
        trading_levels: TradingLevels {
            entry: 100.0,
            take_profit: 110.0,
            stop_loss: 95.0,
            trailing_sl: None,
            partial_tp: None,
        },
        indicators: IndicatorReadings { rsi: 48.25, htf_rsi: 51.0 },
        ai_prediction: Some(AiPrediction::Decision {
            decision: "go".to_string(),
            reason: Some("Trend intact".to_string()),
        }),
        candles: vec![
            Candle {
                timestamp: "2025-01-09 00:00:00".to_string(),
                open: 98.0,
                high: 101.0,
                low: 97.0,
                close: 100.0,
                volume: 1_000.0,
            },
            Candle {
                timestamp: "2025-01-10 00:00:00".to_string(),
                open: 100.0,
                high: 102.0,
                low: 99.0,
                close: 101.5,
                volume: 1_200.0,
            },
        ],
        news: Some(vec![headline("one"), headline("two"), headline("three")]),
        risk_management: None,
    }
}

/// In-memory backend with call counters and switchable failures.
#[derive(Default)]
pub struct FakeBackend {
    pub history: Mutex<Vec<Analysis>>,
    pub settings: Mutex<UserSettings>,
    pub feedback: Mutex<Vec<FeedbackRequest>>,
    pub deleted: Mutex<Vec<String>>,
    pub analyze_requests: Mutex<Vec<AnalyzeRequest>>,
    pub history_fetches: AtomicUsize,
    pub fail_history: AtomicBool,
    pub fail_analyze: AtomicBool,
    pub fail_settings: AtomicBool,
    gate: Notify,
}

impl FakeBackend {
    pub fn with_history(history: Vec<Analysis>) -> Self {
        let backend = Self::default();
        *backend.history.lock() = history;
        backend
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn history_fetches(&self) -> usize {
        self.history_fetches.load(Ordering::SeqCst)
    }

    fn transport_error() -> AppError {
        AppError::Network("connection refused".to_string())
    }
}

#[async_trait]
impl BackendApi for FakeBackend {
    async fn fetch_settings(&self) -> Result<UserSettings, AppError> {
        if self.fail_settings.load(Ordering::SeqCst) {
            return Err(Self::transport_error());
        }
        Ok(*self.settings.lock())
    }

    async fn save_settings(&self, settings: &UserSettings) -> Result<(), AppError> {
        if self.fail_settings.load(Ordering::SeqCst) {
            return Err(Self::transport_error());
        }
        *self.settings.lock() = *settings;
        Ok(())
    }

    async fn fetch_recent_analyses(&self) -> Result<Vec<Analysis>, AppError> {
        self.history_fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_history.load(Ordering::SeqCst) {
            return Err(Self::transport_error());
        }
        Ok(self.history.lock().clone())
    }

    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResponse, AppError> {
        self.analyze_requests.lock().push(request.clone());
        if request.ticker == SLOW_TICKER {
            self.gate.notified().await;
        }
        if self.fail_analyze.load(Ordering::SeqCst) {
            return Err(AppError::Api {
                status: StatusCode::NOT_FOUND,
                message: "No data found for ticker".to_string(),
            });
        }
        Ok(analysis_response(&request.ticker))
    }

    async fn submit_feedback(&self, feedback: &FeedbackRequest) -> Result<(), AppError> {
        let mut history = self.history.lock();
        let Some(entry) = history.iter_mut().find(|a| a.id == feedback.analysis_id) else {
            return Err(AppError::NotFound(feedback.analysis_id.clone()));
        };
        entry.feedback = Some(Feedback {
            submitted: true,
            success: feedback.success,
            remark: feedback.remark.clone(),
        });
        self.feedback.lock().push(feedback.clone());
        Ok(())
    }

    async fn delete_analysis(&self, analysis_id: &str) -> Result<(), AppError> {
        let mut history = self.history.lock();
        let before = history.len();
        history.retain(|a| a.id != analysis_id);
        if history.len() == before {
            return Err(AppError::NotFound(analysis_id.to_string()));
        }
        self.deleted.lock().push(analysis_id.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    ActiveView(Option<View>),
    Header(&'static str),
    Stats(DashboardStats),
    Feed(Vec<ActivityRow>),
    HistoryLoading,
    History(Vec<HistoryRow>),
    HistoryError(String),
    Loading(bool),
    Results(bool),
    Analysis(AnalysisView),
    Settings(UserSettings),
    Notice(String),
    Error(String),
    Confirm(ConfirmPrompt),
}

/// Renderer that records every call in order.
pub struct RecordingRenderer {
    pub events: Mutex<Vec<Rendered>>,
    pub confirm_answer: AtomicBool,
}

impl RecordingRenderer {
    pub fn new(confirm_answer: bool) -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            confirm_answer: AtomicBool::new(confirm_answer),
        }
    }

    pub fn events(&self) -> Vec<Rendered> {
        self.events.lock().clone()
    }

    pub fn count(&self, predicate: impl Fn(&Rendered) -> bool) -> usize {
        self.events.lock().iter().filter(|e| predicate(e)).count()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }

    fn push(&self, event: Rendered) {
        self.events.lock().push(event);
    }
}

#[async_trait]
impl Renderer for RecordingRenderer {
    fn set_active_view(&self, view: Option<View>) {
        self.push(Rendered::ActiveView(view));
    }

    fn show_header(&self, header: signal_dashboard::models::ViewHeader) {
        self.push(Rendered::Header(header.title));
    }

    fn show_stats(&self, stats: &DashboardStats) {
        self.push(Rendered::Stats(*stats));
    }

    fn show_activity_feed(&self, rows: &[ActivityRow]) {
        self.push(Rendered::Feed(rows.to_vec()));
    }

    fn show_history_loading(&self) {
        self.push(Rendered::HistoryLoading);
    }

    fn show_history(&self, rows: &[HistoryRow]) {
        self.push(Rendered::History(rows.to_vec()));
    }

    fn show_history_error(&self, message: &str) {
        self.push(Rendered::HistoryError(message.to_string()));
    }

    fn set_loading(&self, visible: bool) {
        self.push(Rendered::Loading(visible));
    }

    fn set_results_visible(&self, visible: bool) {
        self.push(Rendered::Results(visible));
    }

    fn show_analysis(&self, view: &AnalysisView) {
        self.push(Rendered::Analysis(view.clone()));
    }

    fn show_settings(&self, settings: &UserSettings) {
        self.push(Rendered::Settings(*settings));
    }

    fn notify(&self, message: &str) {
        self.push(Rendered::Notice(message.to_string()));
    }

    fn show_error(&self, message: &str) {
        self.push(Rendered::Error(message.to_string()));
    }

    async fn confirm(&self, prompt: ConfirmPrompt) -> bool {
        self.push(Rendered::Confirm(prompt));
        self.confirm_answer.load(Ordering::SeqCst)
    }
}

pub struct Harness {
    pub backend: Arc<FakeBackend>,
    pub renderer: Arc<RecordingRenderer>,
    pub state: AppState,
}

pub fn harness(history: Vec<Analysis>) -> Harness {
    let backend = Arc::new(FakeBackend::with_history(history));
    let renderer = Arc::new(RecordingRenderer::new(true));
    let state = AppState::new(
        backend.clone(),
        Arc::new(RandomSentimentAnalyzer::seeded(11)),
        renderer.clone(),
        "test-model".to_string(),
        5,
    );
    Harness { backend, renderer, state }
}
