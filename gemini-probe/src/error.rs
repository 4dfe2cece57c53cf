//! Error definitions for the client.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP client error: {source}")]
    HttpClient {
        #[from]
        source: reqwest::Error,
    },

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// 由非 2xx 响应体构造 `ApiError`。
    ///
    /// Google 错误信封 `{"error": {"message": ...}}` 中的 message 优先；
    /// 否则保留原始响应体。
    pub(crate) fn from_api_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .pointer("/error/message")
                    .and_then(Value::as_str)
                    .map(ToString::to_string)
            })
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| body.trim().to_string());
        Self::ApiError { status, message }
    }
}
