//! Tool domain — invocable AI actions published on the platform.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ─── InvokeOptions ───────────────────────────────────────────────────────────

/// Options for a tool invocation.
///
/// Known server options are explicit fields; `extra` passes through any
/// server-defined keys the SDK does not model yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InvokeOptions {
    /// Model override for tools backed by an LLM step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Server-side execution budget for this invocation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u32>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoke_options_default_serializes_empty() {
        let json = serde_json::to_string(&InvokeOptions::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_invoke_options_extra_keys_flatten() {
        let mut options = InvokeOptions {
            model: Some("fs-large-2".to_string()),
            ..Default::default()
        };
        options
            .extra
            .insert("beam_width".to_string(), serde_json::json!(4));

        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value["model"], "fs-large-2");
        assert_eq!(value["beam_width"], 4);

        let back: InvokeOptions = serde_json::from_value(value).unwrap();
        assert_eq!(back, options);
    }
}
