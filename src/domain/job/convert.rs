//! Conversions from wire types to domain types for jobs.

use super::wire::JobResponse;
use super::{Job, JobStatus, UnknownStatus};
use crate::shared::JobId;

impl TryFrom<JobResponse> for Job {
    type Error = UnknownStatus;

    fn try_from(r: JobResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            id: JobId::from(r.id),
            status: JobStatus::parse(&r.status)?,
            progress: r.progress,
            error: r.error,
            created_at: r.created_at,
            updated_at: r.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_job_response(status: &str) -> JobResponse {
        JobResponse {
            id: "job_9f2KxQ".to_string(),
            status: status.to_string(),
            progress: Some(0.4),
            error: None,
            created_at: Utc.timestamp_opt(1738000000, 0).unwrap(),
            updated_at: Some(Utc.timestamp_opt(1738000060, 0).unwrap()),
        }
    }

    #[test]
    fn test_job_response_conversion() {
        let job: Job = sample_job_response("running").try_into().unwrap();
        assert_eq!(job.id.as_str(), "job_9f2KxQ");
        assert_eq!(job.status, JobStatus::Running);
        assert_eq!(job.progress, Some(0.4));
        assert!(job.error.is_none());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let err = Job::try_from(sample_job_response("paused")).unwrap_err();
        assert_eq!(err, UnknownStatus("paused".to_string()));
    }
}
