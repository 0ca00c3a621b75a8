//! Wire types for file responses (REST).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw file record from the REST API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileResponse {
    pub id: String,
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    pub size_bytes: u64,
    pub created_at: DateTime<Utc>,
}

/// Acknowledgement for a deletion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileDeletedResponse {
    pub id: String,
    pub deleted: bool,
}
