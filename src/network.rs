//! Network constants for the Flowstack SDK.

/// Default REST + GraphQL API base URL.
pub const DEFAULT_API_URL: &str = "https://api.flowstack.dev";

/// Product identifier sent as the `User-Agent` header on every request.
pub const USER_AGENT: &str = concat!("flowstack-sdk-rust/", env!("CARGO_PKG_VERSION"));
