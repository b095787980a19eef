use tracing::{debug, error, info};

use crate::errors::AppError;
use crate::models::{AnalysisResponse, AnalysisView, AnalyzeRequest};
use crate::services::panel_service;
use crate::state::AppState;

/// Trim and upper-case user input; `None` when nothing is left.
pub fn normalize_ticker(input: &str) -> Option<String> {
    let ticker = input.trim().to_uppercase();
    if ticker.is_empty() {
        None
    } else {
        Some(ticker)
    }
}

/// One "analyze ticker" request/response cycle.
///
/// A newer run supersedes any run still in flight: the older response is
/// dropped without touching the UI, and only the newest run clears the
/// loading indicator.
#[derive(Clone)]
pub struct AnalysisSession {
    state: AppState,
}

impl AnalysisSession {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// `Ok(None)` for blank input: nothing is sent and nothing changes.
    pub async fn run_analysis(&self, ticker: &str, model: &str) -> Result<Option<AnalysisResponse>, AppError> {
        let Some(ticker) = normalize_ticker(ticker) else {
            debug!("Ignoring analysis request with empty ticker");
            return Ok(None);
        };
        let model = match model.trim() {
            "" => self.state.default_model.clone(),
            m => m.to_string(),
        };

        let generation = self.begin();
        info!("Analyzing {} with {}", ticker, model);

        let outcome = self.dispatch(&ticker, &model).await;

        if !self.is_current(generation) {
            debug!("Dropping superseded analysis of {} (run {})", ticker, generation);
            return Err(AppError::Superseded);
        }

        let result = match outcome {
            Ok((response, view)) => {
                self.state.renderer.show_analysis(&view);
                {
                    let mut ui = self.state.ui.write();
                    ui.results_visible = true;
                    ui.last_analysis_id = response.analysis_id.clone();
                }
                self.state.renderer.set_results_visible(true);
                info!("Analysis of {} complete", ticker);
                Ok(Some(response))
            }
            Err(e) => {
                error!("Analysis of {} failed: {}", ticker, e);
                self.state
                    .renderer
                    .show_error(&format!("Analysis failed: {}", e.user_message()));
                Err(e)
            }
        };

        self.state.ui.write().loading = false;
        self.state.renderer.set_loading(false);
        result
    }

    /// Show the loading indicator, hide stale results and take a new
    /// generation number.
    fn begin(&self) -> u64 {
        let generation = {
            let mut ui = self.state.ui.write();
            ui.analysis_generation += 1;
            ui.loading = true;
            ui.results_visible = false;
            ui.analysis_generation
        };
        self.state.renderer.set_loading(true);
        self.state.renderer.set_results_visible(false);
        generation
    }

    fn is_current(&self, generation: u64) -> bool {
        self.state.ui.read().analysis_generation == generation
    }

    async fn dispatch(&self, ticker: &str, model: &str) -> Result<(AnalysisResponse, AnalysisView), AppError> {
        let request = AnalyzeRequest {
            ticker: ticker.to_string(),
            model: model.to_string(),
        };
        let mut response = self.state.backend.analyze(&request).await?;

        let news = response.news.as_deref().unwrap_or_default();
        let report = self.state.sentiment.analyze(ticker, news).await?;

        let view = panel_service::build_analysis_view(&response, &report);
        if response.news.is_some() {
            response.news = Some(report.news);
        }
        Ok((response, view))
    }
}
