use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::errors::AppError;
use crate::external::backend_api::BackendApi;
use crate::models::{Analysis, AnalysisResponse, AnalyzeRequest, FeedbackRequest, UserSettings};

pub struct HttpBackend {
    client: reqwest::Client,
    base_url: url::Url,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| AppError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.backend_url.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<url::Url, AppError> {
        Ok(self.base_url.join(path)?)
    }

    async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, AppError> {
        let resp = Self::ensure_success(resp).await?;
        resp.json::<T>().await.map_err(|e| AppError::Parse(e.to_string()))
    }

    /// Non-2xx responses carry their body text as the failure message.
    async fn ensure_success(resp: Response) -> Result<Response, AppError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let message = resp.text().await.unwrap_or_default();
        warn!("Backend returned {}: {}", status, message);

        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(message));
        }
        Err(AppError::Api { status, message })
    }
}

#[async_trait]
impl BackendApi for HttpBackend {
    async fn fetch_settings(&self) -> Result<UserSettings, AppError> {
        let resp = self.client.get(self.endpoint("/api/settings")?).send().await?;
        Self::read_json(resp).await
    }

    async fn save_settings(&self, settings: &UserSettings) -> Result<(), AppError> {
        let resp = self
            .client
            .post(self.endpoint("/api/settings")?)
            .json(settings)
            .send()
            .await?;
        Self::ensure_success(resp).await?;
        Ok(())
    }

    async fn fetch_recent_analyses(&self) -> Result<Vec<Analysis>, AppError> {
        let resp = self
            .client
            .get(self.endpoint("/api/recent-analyses")?)
            .send()
            .await?;
        let analyses: Vec<Analysis> = Self::read_json(resp).await?;
        debug!("Fetched {} analyses", analyses.len());
        Ok(analyses)
    }

    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResponse, AppError> {
        debug!("POST /api/analyze ticker={} model={}", request.ticker, request.model);
        let resp = self
            .client
            .post(self.endpoint("/api/analyze")?)
            .json(request)
            .send()
            .await?;

        // A 404 here means the ticker had no market data; keep it as a
        // plain API failure so the body text reaches the user.
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            warn!("Analysis of {} failed with {}", request.ticker, status);
            return Err(AppError::Api { status, message });
        }
        resp.json::<AnalysisResponse>()
            .await
            .map_err(|e| AppError::Parse(e.to_string()))
    }

    async fn submit_feedback(&self, feedback: &FeedbackRequest) -> Result<(), AppError> {
        let resp = self
            .client
            .post(self.endpoint("/api/feedback")?)
            .json(feedback)
            .send()
            .await?;
        Self::ensure_success(resp).await?;
        Ok(())
    }

    async fn delete_analysis(&self, analysis_id: &str) -> Result<(), AppError> {
        let mut url = self.endpoint("/api/analysis/")?;
        url.path_segments_mut()
            .map_err(|_| AppError::Config("backend url cannot be a base".to_string()))?
            .pop_if_empty()
            .push(analysis_id);

        let resp = self.client.delete(url).send().await?;
        Self::ensure_success(resp).await?;
        Ok(())
    }
}
