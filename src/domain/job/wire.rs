//! Wire types for job responses (REST).

use crate::shared::JobId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw job from the REST API.
///
/// `status` stays a plain string here; parsing into [`JobStatus`]
/// happens in the conversion to [`Job`].
///
/// [`JobStatus`]: crate::domain::job::JobStatus
/// [`Job`]: crate::domain::job::Job
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobResponse {
    pub id: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Acknowledgement for an accepted asynchronous operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobAccepted {
    pub job_id: JobId,
}
