//! Unified SDK error types.

use crate::shared::JobId;
use std::time::Duration;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("GraphQL request failed: {0}")]
    Graphql(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Job {id} failed: {detail}")]
    JobFailed { id: JobId, detail: String },

    #[error("Job {id} was cancelled")]
    JobCancelled { id: JobId },

    #[error("Timed out after {elapsed:?} waiting for job {id}")]
    WaitTimeout { id: JobId, elapsed: Duration },

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors — one variant per response class.
///
/// Status mapping: 400 → [`Validation`](HttpError::Validation),
/// 401 → [`Authentication`](HttpError::Authentication),
/// 404 → [`NotFound`](HttpError::NotFound),
/// 429 → [`RateLimited`](HttpError::RateLimited),
/// 500/502/503/504 → [`Server`](HttpError::Server),
/// any other non-2xx → [`Unexpected`](HttpError::Unexpected).
#[derive(Error, Debug)]
pub enum HttpError {
    /// No response was received — connect, TLS, or timeout failure.
    #[cfg(feature = "http")]
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The request could not be constructed locally; no connection was attempted.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// 400 — the server rejected the request as malformed.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// 401 — bad or missing credential.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// 404 — resource absent.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 429 — throttled. `retry_after` is parsed from the `Retry-After`
    /// header (seconds), defaulting to 60s when absent or unparsable.
    #[error("Rate limited (retry after {retry_after:?})")]
    RateLimited { retry_after: Duration },

    /// 500/502/503/504 — upstream failure.
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Any other non-2xx status.
    #[error("Unexpected status {status}: {message}")]
    Unexpected { status: u16, message: String },

    /// The response arrived but its body could not be decoded.
    #[cfg(feature = "http")]
    #[error("Failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),
}
