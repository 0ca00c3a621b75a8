//! Wire types for tool responses (REST).

use crate::domain::tool::InvokeOptions;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw tool from the REST API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// JSON Schema for the tool's `input` payload, when published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_schema: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Paginated tool listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolsResponse {
    pub tools: Vec<ToolResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

/// Request body for `POST /api/v1/tools/{id}/invoke` and `…/invoke-async`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvokeToolRequest {
    pub input: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<InvokeOptions>,
}
