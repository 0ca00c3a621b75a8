//! # Flowstack SDK
//!
//! A typed Rust client for the Flowstack platform's REST + GraphQL API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, error taxonomy, network constants (WASM-safe)
//! 2. **HTTP API** — `FlowstackHttp` with per-endpoint retry policies
//! 3. **GraphQL** — Wire types + sub-client for the GraphQL endpoint
//! 4. **Domain** — Vertical slices: tools, workflows, files, jobs
//! 5. **High-Level Client** — `FlowstackClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use flowstack_sdk::prelude::*;
//!
//! let client = FlowstackClient::builder()
//!     .api_key("fs_live_…")
//!     .build()?;
//!
//! let tools = client.tools().list(None, Some(20)).await?;
//! let accepted = client.tools().invoke_async(
//!     "tool_summarize",
//!     serde_json::json!({"text": "…"}),
//!     None,
//! ).await?;
//! let job = client.jobs()
//!     .wait_for_completion(&accepted.job_id, WaitOptions::default())
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: GraphQL ─────────────────────────────────────────────────────────

/// GraphQL endpoint types and sub-client.
pub mod graphql;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `FlowstackClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::JobId;

    // Domain types — job
    pub use crate::domain::job::{Job, JobStatus};

    // Domain types — tool, workflow
    pub use crate::domain::tool::InvokeOptions;
    pub use crate::domain::workflow::RunOptions;

    // Wire types callers commonly touch
    pub use crate::domain::file::wire::FileResponse;
    pub use crate::domain::job::wire::JobAccepted;
    pub use crate::domain::tool::wire::{ToolResponse, ToolsResponse};
    pub use crate::domain::workflow::wire::{WorkflowResponse, WorkflowsResponse};

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // GraphQL
    pub use crate::graphql::{GraphqlRequest, GraphqlResponse};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{FlowstackClient, FlowstackClientBuilder};
    #[cfg(feature = "http")]
    pub use crate::domain::job::client::{Jobs, WaitOptions};
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
