//! Workflow domain — multi-step chains executed server-side.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ─── RunOptions ──────────────────────────────────────────────────────────────

/// Options for a workflow run.
///
/// Known server options are explicit fields; `extra` passes through any
/// server-defined keys the SDK does not model yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RunOptions {
    /// Callback invoked by the server when the run reaches a terminal state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    /// Server-side budget for the whole run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_duration_secs: Option<u32>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_options_round_trip_with_extra_keys() {
        let mut options = RunOptions {
            webhook_url: Some("https://example.com/hook".to_string()),
            max_duration_secs: Some(900),
            ..Default::default()
        };
        options
            .extra
            .insert("trace".to_string(), serde_json::json!(true));

        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value["webhook_url"], "https://example.com/hook");
        assert_eq!(value["trace"], true);

        let back: RunOptions = serde_json::from_value(value).unwrap();
        assert_eq!(back, options);
    }
}
