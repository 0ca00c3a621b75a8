//! Low-level HTTP client — `FlowstackHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain
//! types happens at the sub-client boundary). Internal to the SDK — the
//! high-level `FlowstackClient` wraps this.

use crate::domain::file::wire::{FileDeletedResponse, FileResponse};
use crate::domain::job::wire::{JobAccepted, JobResponse};
use crate::domain::tool::wire::{InvokeToolRequest, ToolResponse, ToolsResponse};
use crate::domain::workflow::wire::{RunWorkflowRequest, WorkflowResponse, WorkflowsResponse};
use crate::error::HttpError;
use crate::graphql::{GraphqlRequest, GraphqlResponse};
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::network::USER_AGENT;
use crate::shared::JobId;

use futures_timer::Delay;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing;

/// Fallback delay for a 429 without a parsable `Retry-After` header.
const DEFAULT_RETRY_AFTER: Duration = Duration::from_secs(60);

/// Low-level HTTP client for the Flowstack REST + GraphQL API.
pub struct FlowstackHttp {
    base_url: String,
    /// API key sent as `x-api-key` on every request. NEVER exposed publicly.
    api_key: String,
    client: Client,
    retry: RetryConfig,
}

impl FlowstackHttp {
    pub(crate) fn new(
        base_url: &str,
        api_key: &str,
        timeout: Duration,
        retry: RetryConfig,
        transport: Option<Client>,
    ) -> Result<Self, HttpError> {
        let client = match transport {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                #[cfg(not(target_arch = "wasm32"))]
                {
                    builder = builder.timeout(timeout).pool_max_idle_per_host(10);
                }
                #[cfg(target_arch = "wasm32")]
                let _ = timeout;
                builder
                    .build()
                    .map_err(|e| HttpError::InvalidRequest(e.to_string()))?
            }
        };

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
            retry,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Tools ────────────────────────────────────────────────────────────

    pub async fn list_tools(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<ToolsResponse, HttpError> {
        let mut url = format!("{}/api/v1/tools", self.base_url);
        let mut params = Vec::new();
        if let Some(p) = page {
            params.push(format!("page={}", p));
        }
        if let Some(l) = limit {
            params.push(format!("limit={}", l));
        }
        if !params.is_empty() {
            url = format!("{}?{}", url, params.join("&"));
        }
        self.get(&url, RetryPolicy::Transient).await
    }

    pub async fn search_tools(
        &self,
        query: &str,
        limit: Option<u32>,
    ) -> Result<Vec<ToolResponse>, HttpError> {
        let mut url = format!(
            "{}/api/v1/tools/search?q={}",
            self.base_url,
            urlencoding::encode(query)
        );
        if let Some(l) = limit {
            url = format!("{}&limit={}", url, l);
        }
        self.get(&url, RetryPolicy::Transient).await
    }

    pub async fn get_tool(&self, tool_id: &str) -> Result<ToolResponse, HttpError> {
        let url = format!("{}/api/v1/tools/{}", self.base_url, tool_id);
        self.get(&url, RetryPolicy::Transient).await
    }

    pub async fn invoke_tool(
        &self,
        tool_id: &str,
        request: &InvokeToolRequest,
    ) -> Result<serde_json::Value, HttpError> {
        let url = format!("{}/api/v1/tools/{}/invoke", self.base_url, tool_id);
        self.post(&url, request, RetryPolicy::None).await
    }

    pub async fn invoke_tool_async(
        &self,
        tool_id: &str,
        request: &InvokeToolRequest,
    ) -> Result<JobAccepted, HttpError> {
        let url = format!("{}/api/v1/tools/{}/invoke-async", self.base_url, tool_id);
        self.post(&url, request, RetryPolicy::None).await
    }

    // ── Workflows ────────────────────────────────────────────────────────

    pub async fn list_workflows(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<WorkflowsResponse, HttpError> {
        let mut url = format!("{}/api/v1/workflows", self.base_url);
        let mut params = Vec::new();
        if let Some(p) = page {
            params.push(format!("page={}", p));
        }
        if let Some(l) = limit {
            params.push(format!("limit={}", l));
        }
        if !params.is_empty() {
            url = format!("{}?{}", url, params.join("&"));
        }
        self.get(&url, RetryPolicy::Transient).await
    }

    pub async fn get_workflow(&self, workflow_id: &str) -> Result<WorkflowResponse, HttpError> {
        let url = format!("{}/api/v1/workflows/{}", self.base_url, workflow_id);
        self.get(&url, RetryPolicy::Transient).await
    }

    pub async fn run_workflow(
        &self,
        workflow_id: &str,
        request: &RunWorkflowRequest,
    ) -> Result<JobAccepted, HttpError> {
        let url = format!("{}/api/v1/workflows/{}/run", self.base_url, workflow_id);
        self.post(&url, request, RetryPolicy::None).await
    }

    // ── Files ────────────────────────────────────────────────────────────

    /// Upload a file as `multipart/form-data`.
    ///
    /// Multipart bodies are consumed on send and cannot be replayed, so
    /// uploads always run as a single attempt. The multipart boundary
    /// content-type replaces the default JSON content-type.
    pub async fn upload_file(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<FileResponse, HttpError> {
        let url = format!("{}/api/v1/files", self.base_url);

        let mut part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        if let Some(ct) = content_type {
            part = part
                .mime_str(ct)
                .map_err(|e| HttpError::InvalidRequest(e.to_string()))?;
        }
        let form = reqwest::multipart::Form::new().part("file", part);

        let resp = self
            .request_builder(reqwest::Method::POST, &url)
            .multipart(form)
            .send()
            .await
            .map_err(classify_transport)?;
        let resp = check_status(resp).await?;
        resp.json().await.map_err(HttpError::Decode)
    }

    pub async fn get_file(&self, file_id: &str) -> Result<FileResponse, HttpError> {
        let url = format!("{}/api/v1/files/{}", self.base_url, file_id);
        self.get(&url, RetryPolicy::Transient).await
    }

    /// Download raw file content.
    pub async fn download_file(&self, file_id: &str) -> Result<Vec<u8>, HttpError> {
        let url = format!("{}/api/v1/files/{}/content", self.base_url, file_id);
        let resp = self
            .request_with_retry(reqwest::Method::GET, &url, None::<&()>, RetryPolicy::Transient)
            .await?;
        Ok(resp.bytes().await.map_err(HttpError::Decode)?.to_vec())
    }

    pub async fn delete_file(&self, file_id: &str) -> Result<FileDeletedResponse, HttpError> {
        let url = format!("{}/api/v1/files/{}", self.base_url, file_id);
        self.delete(&url, RetryPolicy::None).await
    }

    // ── Jobs ─────────────────────────────────────────────────────────────

    pub async fn get_job(&self, job_id: &JobId) -> Result<JobResponse, HttpError> {
        let url = format!("{}/api/v1/jobs/{}", self.base_url, job_id);
        self.get(&url, RetryPolicy::Transient).await
    }

    pub async fn cancel_job(&self, job_id: &JobId) -> Result<JobResponse, HttpError> {
        let url = format!("{}/api/v1/jobs/{}/cancel", self.base_url, job_id);
        self.post(&url, &serde_json::json!({}), RetryPolicy::None).await
    }

    // ── GraphQL ──────────────────────────────────────────────────────────

    pub async fn graphql(&self, request: &GraphqlRequest) -> Result<GraphqlResponse, HttpError> {
        let url = format!("{}/api/v1/graphql", self.base_url);
        self.post(&url, request, RetryPolicy::Transient).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str, retry: RetryPolicy) -> Result<T, HttpError> {
        let resp = self
            .request_with_retry(reqwest::Method::GET, url, None::<&()>, retry)
            .await?;
        resp.json().await.map_err(HttpError::Decode)
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let resp = self
            .request_with_retry(reqwest::Method::POST, url, Some(body), retry)
            .await?;
        resp.json().await.map_err(HttpError::Decode)
    }

    async fn delete<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let resp = self
            .request_with_retry(reqwest::Method::DELETE, url, None::<&()>, retry)
            .await?;
        resp.json().await.map_err(HttpError::Decode)
    }

    /// Execute one logical call: attempt, classify, retry transient
    /// failures, and return the first successful response.
    ///
    /// Attempts are strictly sequential — a retry never starts before the
    /// previous attempt's outcome is observed and its backoff has elapsed.
    /// After `max_attempts` the last classified error propagates as-is.
    async fn request_with_retry<B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<reqwest::Response, HttpError> {
        let config = match retry {
            RetryPolicy::None => {
                return self.do_request(&method, url, body).await;
            }
            RetryPolicy::Transient => self.retry.clone(),
            RetryPolicy::Custom(config) => config,
        };
        let max_attempts = config.max_attempts.max(1);

        // The attempt index is local to this call; concurrent calls never
        // share retry state.
        let mut attempt: u32 = 1;
        loop {
            match self.do_request(&method, url, body).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let delay = retry_delay(&config, &e, attempt);
                    match delay {
                        Some(delay) if attempt < max_attempts => {
                            tracing::debug!(
                                attempt,
                                max = max_attempts,
                                delay_ms = delay.as_millis() as u64,
                                "Retrying request to {}",
                                url
                            );
                            Delay::new(delay).await;
                            attempt += 1;
                        }
                        _ => return Err(e),
                    }
                }
            }
        }
    }

    /// Single attempt: send the request and classify the outcome.
    async fn do_request<B: Serialize>(
        &self,
        method: &reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, HttpError> {
        let mut req = self.request_builder(method.clone(), url);
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await.map_err(classify_transport)?;
        check_status(resp).await
    }

    /// Base request carrying the fixed header set: API key + product
    /// identifier. JSON bodies add their content-type via `.json()`.
    fn request_builder(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .header("x-api-key", &self.api_key)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
    }
}

impl Clone for FlowstackHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            client: self.client.clone(),
            retry: self.retry.clone(),
        }
    }
}

// ── Classification ───────────────────────────────────────────────────────

/// Pass 2xx responses through; map anything else to its error class.
async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, HttpError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let retry_after = parse_retry_after(resp.headers());
    let body_text = resp.text().await.unwrap_or_default();
    Err(classify_status(status.as_u16(), retry_after, &body_text))
}

/// Map a non-success status code to its [`HttpError`] class.
fn classify_status(status: u16, retry_after: Option<Duration>, body: &str) -> HttpError {
    let message = error_message(body);
    match status {
        400 => HttpError::Validation(message),
        401 => HttpError::Authentication(message),
        404 => HttpError::NotFound(message),
        429 => HttpError::RateLimited {
            retry_after: retry_after.unwrap_or(DEFAULT_RETRY_AFTER),
        },
        500 | 502 | 503 | 504 => HttpError::Server { status, message },
        _ => HttpError::Unexpected { status, message },
    }
}

/// Seconds-form `Retry-After` header. `None` when absent or unparsable.
fn parse_retry_after(headers: &reqwest::header::HeaderMap) -> Option<Duration> {
    headers
        .get(reqwest::header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

/// Pull the human-readable message out of `{"error": {"message": …}}` or
/// `{"message": …}` bodies; fall back to the raw body.
fn error_message(body: &str) -> String {
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(m) = v.pointer("/error/message").and_then(|m| m.as_str()) {
            return m.to_string();
        }
        if let Some(m) = v.get("message").and_then(|m| m.as_str()) {
            return m.to_string();
        }
    }
    body.to_string()
}

/// Failures with no HTTP response: builder errors never reached the wire,
/// everything else is a transport failure.
fn classify_transport(e: reqwest::Error) -> HttpError {
    if e.is_builder() {
        HttpError::InvalidRequest(e.to_string())
    } else {
        HttpError::Network(e)
    }
}

/// Decide whether `error` is transient and, if so, how long to wait before
/// the given retry (1-indexed). Non-transient classes return `None`.
///
/// A throttled call waits the server-directed `Retry-After` interval
/// instead of the exponential step.
fn retry_delay(config: &RetryConfig, error: &HttpError, retry: u32) -> Option<Duration> {
    match error {
        HttpError::Server { status, .. } if config.retryable_statuses.contains(status) => {
            Some(config.delay_for_retry(retry))
        }
        HttpError::RateLimited { retry_after } => Some(*retry_after),
        HttpError::Network(_) => Some(config.delay_for_retry(retry)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_status_exact_mapping() {
        assert!(matches!(
            classify_status(400, None, "bad"),
            HttpError::Validation(_)
        ));
        assert!(matches!(
            classify_status(401, None, "no"),
            HttpError::Authentication(_)
        ));
        assert!(matches!(
            classify_status(404, None, "gone"),
            HttpError::NotFound(_)
        ));
        for status in [500u16, 502, 503, 504] {
            assert!(matches!(
                classify_status(status, None, "boom"),
                HttpError::Server { status: s, .. } if s == status
            ));
        }
        assert!(matches!(
            classify_status(418, None, "teapot"),
            HttpError::Unexpected { status: 418, .. }
        ));
    }

    #[test]
    fn test_classify_429_uses_header_or_default() {
        let with_header = classify_status(429, Some(Duration::from_secs(7)), "");
        assert!(matches!(
            with_header,
            HttpError::RateLimited { retry_after } if retry_after == Duration::from_secs(7)
        ));

        let without = classify_status(429, None, "");
        assert!(matches!(
            without,
            HttpError::RateLimited { retry_after } if retry_after == Duration::from_secs(60)
        ));
    }

    #[test]
    fn test_parse_retry_after_seconds_and_garbage() {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(reqwest::header::RETRY_AFTER, "12".parse().unwrap());
        assert_eq!(parse_retry_after(&headers), Some(Duration::from_secs(12)));

        headers.insert(reqwest::header::RETRY_AFTER, "soon".parse().unwrap());
        assert_eq!(parse_retry_after(&headers), None);

        assert_eq!(parse_retry_after(&reqwest::header::HeaderMap::new()), None);
    }

    #[test]
    fn test_error_message_unwraps_known_shapes() {
        assert_eq!(
            error_message(r#"{"error": {"message": "tool not found", "code": "not_found"}}"#),
            "tool not found"
        );
        assert_eq!(error_message(r#"{"message": "nope"}"#), "nope");
        assert_eq!(error_message("plain text"), "plain text");
    }

    #[test]
    fn test_retry_delay_classes() {
        let config = RetryConfig::default();

        let server = HttpError::Server {
            status: 503,
            message: String::new(),
        };
        assert_eq!(
            retry_delay(&config, &server, 1),
            Some(Duration::from_secs(2))
        );

        let throttled = HttpError::RateLimited {
            retry_after: Duration::from_secs(9),
        };
        assert_eq!(
            retry_delay(&config, &throttled, 1),
            Some(Duration::from_secs(9))
        );

        let permanent = HttpError::NotFound("gone".to_string());
        assert_eq!(retry_delay(&config, &permanent, 1), None);

        let validation = HttpError::Validation("bad".to_string());
        assert_eq!(retry_delay(&config, &validation, 1), None);
    }

    #[test]
    fn test_retry_delay_respects_configured_statuses() {
        let config = RetryConfig {
            retryable_statuses: vec![503],
            ..RetryConfig::default()
        };
        let not_retryable = HttpError::Server {
            status: 500,
            message: String::new(),
        };
        assert_eq!(retry_delay(&config, &not_retryable, 1), None);
    }
}
