//! High-level client — `FlowstackClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::file::client::Files;
use crate::domain::job::client::Jobs;
use crate::domain::tool::client::Tools;
use crate::domain::workflow::client::Workflows;
use crate::error::SdkError;
use crate::graphql::client::Graphql;
use crate::http::{FlowstackHttp, RetryConfig};

use std::time::Duration;

/// The primary entry point for the Flowstack SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.tools()`, `client.jobs()`, etc. The client is immutable after
/// construction and cheaply cloneable; clones share the underlying
/// transport and are safe to use from concurrent tasks.
pub struct FlowstackClient {
    pub(crate) http: FlowstackHttp,
}

impl FlowstackClient {
    pub fn builder() -> FlowstackClientBuilder {
        FlowstackClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn tools(&self) -> Tools<'_> {
        Tools { client: self }
    }

    pub fn workflows(&self) -> Workflows<'_> {
        Workflows { client: self }
    }

    pub fn files(&self) -> Files<'_> {
        Files { client: self }
    }

    pub fn jobs(&self) -> Jobs<'_> {
        Jobs { client: self }
    }

    pub fn graphql(&self) -> Graphql<'_> {
        Graphql { client: self }
    }
}

impl Clone for FlowstackClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
        }
    }
}

impl std::fmt::Debug for FlowstackClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowstackClient").finish_non_exhaustive()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct FlowstackClientBuilder {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
    retry: RetryConfig,
    transport: Option<reqwest::Client>,
}

impl Default for FlowstackClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
            retry: RetryConfig::default(),
            transport: None,
        }
    }
}

impl FlowstackClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    /// Per-request timeout applied to the built-in transport. Ignored when
    /// a custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the default retry configuration wholesale.
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Maximum attempts per logical call, counting the first.
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.retry.max_attempts = max_attempts;
        self
    }

    /// Supply a pre-configured `reqwest::Client` instead of the built-in
    /// transport. Timeouts and pooling are then the caller's concern.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.transport = Some(client);
        self
    }

    pub fn build(self) -> Result<FlowstackClient, SdkError> {
        let api_key = self
            .api_key
            .ok_or_else(|| SdkError::Validation("api_key is required".to_string()))?;
        let http = FlowstackHttp::new(
            &self.base_url,
            &api_key,
            self.timeout,
            self.retry,
            self.transport,
        )?;
        Ok(FlowstackClient { http })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_api_key() {
        let err = FlowstackClient::builder().build().unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }

    #[test]
    fn test_build_with_defaults() {
        let client = FlowstackClient::builder()
            .api_key("fs_test_key")
            .build()
            .unwrap();
        assert_eq!(client.http.base_url(), crate::network::DEFAULT_API_URL);
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = FlowstackClient::builder()
            .api_key("fs_test_key")
            .base_url("https://staging.flowstack.dev/")
            .build()
            .unwrap();
        assert_eq!(client.http.base_url(), "https://staging.flowstack.dev");
    }
}
