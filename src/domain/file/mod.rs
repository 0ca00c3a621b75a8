//! File domain — uploaded assets referenced by tools and workflows.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;
