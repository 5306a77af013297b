use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when using the Zyra API client
#[derive(Debug, Error)]
pub enum ZyraError {
    /// HTTP transport error (connection, DNS, timeout)
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// API error returned by the Zyra service
    #[error("Zyra API error: {}", .0.detail())]
    Api(ApiErrorObject),

    /// Configuration error (e.g., missing credentials)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(String),
}

/// Error body returned by the Zyra service
///
/// Failed requests carry the same envelope shape as successful ones, with
/// `success: false` and an explanation in `message` or `error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorObject {
    /// HTTP status code of the failed response
    #[serde(default)]
    pub status_code: Option<u16>,
    /// Envelope success flag, `false` on error responses
    #[serde(default)]
    pub success: Option<bool>,
    /// Human-readable error message
    #[serde(default)]
    pub message: Option<String>,
    /// Error description string
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorObject {
    /// Returns the most specific explanation the server provided
    ///
    /// Prefers `message`, falls back to `error`, then to a generic
    /// status-derived label.
    #[must_use]
    pub fn detail(&self) -> String {
        if let Some(m) = &self.message
            && !m.is_empty()
        {
            return m.clone();
        }
        if let Some(e) = &self.error
            && !e.is_empty()
        {
            return e.clone();
        }
        match self.status_code {
            Some(code) => format!("http_{code}"),
            None => "unknown error".into(),
        }
    }
}

/// Maps a serde deserialization error to a `ZyraError` with context
#[must_use]
pub fn map_deser(e: &serde_json::Error, body: &[u8]) -> ZyraError {
    let snippet = String::from_utf8_lossy(&body[..body.len().min(400)]).to_string();
    ZyraError::Serde(format!("{e}: {snippet}"))
}

/// Deserializes an API error from the response body
///
/// Attempts to parse the error as a Zyra envelope, falling back to plain text
/// on failure.
#[must_use]
pub fn deserialize_api_error(status: StatusCode, body: &[u8]) -> ZyraError {
    let status_code = Some(status.as_u16());

    if let Ok(mut obj) = serde_json::from_slice::<ApiErrorObject>(body) {
        obj.status_code = status_code;
        return ZyraError::Api(obj);
    }

    // Server may return plain text on 5xx; cap body to avoid log/memory bloat
    ZyraError::Api(ApiErrorObject {
        status_code,
        success: None,
        message: Some(String::from_utf8_lossy(&body[..body.len().min(400)]).into_owned()),
        error: Some(format!("http_{}", status.as_u16())),
    })
}
