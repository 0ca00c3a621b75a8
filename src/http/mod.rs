//! HTTP client layer — `FlowstackHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::FlowstackHttp;
pub use retry::{RetryConfig, RetryPolicy};
