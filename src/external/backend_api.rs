use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::{Analysis, AnalysisResponse, AnalyzeRequest, FeedbackRequest, UserSettings};

/// The dashboard backend as seen by the client engine.
#[async_trait]
pub trait BackendApi: Send + Sync {
    async fn fetch_settings(&self) -> Result<UserSettings, AppError>;

    async fn save_settings(&self, settings: &UserSettings) -> Result<(), AppError>;

    /// Stored analyses, newest first.
    async fn fetch_recent_analyses(&self) -> Result<Vec<Analysis>, AppError>;

    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResponse, AppError>;

    async fn submit_feedback(&self, feedback: &FeedbackRequest) -> Result<(), AppError>;

    async fn delete_analysis(&self, analysis_id: &str) -> Result<(), AppError>;
}
