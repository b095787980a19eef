use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    Api { status: StatusCode, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Superseded by a newer request")]
    Superseded,
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Message shown to the user when an operation is aborted.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api { status, message } if message.trim().is_empty() => {
                format!("Backend returned {}", status)
            }
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            AppError::Parse(value.to_string())
        } else {
            AppError::Network(value.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        AppError::Parse(value.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(value: url::ParseError) -> Self {
        AppError::Config(value.to_string())
    }
}
