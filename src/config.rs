use std::time::Duration;

use crate::errors::AppError;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
pub const DEFAULT_MODEL: &str = "deepseek-v3.1:671b-cloud";
pub const DEFAULT_FEED_SIZE: usize = 5;

/// Client settings read from the environment (`.env` is honoured via dotenvy).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub backend_url: url::Url,
    pub default_model: String,
    /// No timeout unless `REQUEST_TIMEOUT_SECS` is set.
    pub request_timeout: Option<Duration>,
    pub feed_size: usize,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let backend_url = std::env::var("BACKEND_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        let default_model = std::env::var("DEFAULT_MODEL")
            .unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let request_timeout = std::env::var("REQUEST_TIMEOUT_SECS").ok();
        let feed_size = std::env::var("FEED_SIZE").ok();

        Self::from_parts(
            &backend_url,
            default_model,
            request_timeout.as_deref(),
            feed_size.as_deref(),
        )
    }

    pub fn from_parts(
        backend_url: &str,
        default_model: String,
        request_timeout: Option<&str>,
        feed_size: Option<&str>,
    ) -> Result<Self, AppError> {
        let backend_url = url::Url::parse(backend_url)?;

        let request_timeout = match request_timeout {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    AppError::Config(format!("REQUEST_TIMEOUT_SECS must be an integer, got '{}'", raw))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let feed_size = match feed_size {
            Some(raw) => raw.trim().parse().map_err(|_| {
                AppError::Config(format!("FEED_SIZE must be an integer, got '{}'", raw))
            })?,
            None => DEFAULT_FEED_SIZE,
        };

        Ok(Self {
            backend_url,
            default_model,
            request_timeout,
            feed_size,
        })
    }
}
