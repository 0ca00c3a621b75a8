//! Jobs sub-client — fetch, cancel, wait for completion.

use crate::client::FlowstackClient;
use crate::domain::job::{Job, JobStatus};
use crate::error::SdkError;
use crate::shared::JobId;
use futures_timer::Delay;
use std::time::{Duration, Instant};

/// Options for [`Jobs::wait_for_completion`].
#[derive(Debug, Clone)]
pub struct WaitOptions {
    /// Total wall-clock budget for the wait.
    pub timeout: Duration,
    /// Pause between consecutive status fetches.
    pub poll_interval: Duration,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(3600),
            poll_interval: Duration::from_secs(5),
        }
    }
}

/// Sub-client for job operations.
pub struct Jobs<'a> {
    pub(crate) client: &'a FlowstackClient,
}

impl<'a> Jobs<'a> {
    /// Fetch the current snapshot of a job.
    pub async fn get(&self, id: &JobId) -> Result<Job, SdkError> {
        let resp = self.client.http.get_job(id).await?;
        Job::try_from(resp).map_err(|e| SdkError::Validation(e.to_string()))
    }

    /// Ask the server to cancel a job. Returns the resulting snapshot.
    pub async fn cancel(&self, id: &JobId) -> Result<Job, SdkError> {
        let resp = self.client.http.cancel_job(id).await?;
        Job::try_from(resp).map_err(|e| SdkError::Validation(e.to_string()))
    }

    /// Poll a job until it reaches a terminal state or the timeout elapses.
    ///
    /// Returns the completed snapshot. A `failed` job surfaces as
    /// [`SdkError::JobFailed`] carrying the server-reported detail, a
    /// `cancelled` one as [`SdkError::JobCancelled`]; neither is ever
    /// re-polled by the same wait.
    ///
    /// Status fetches for one wait are strictly sequential, separated by
    /// `poll_interval` sleeps. Dropping the returned future abandons the
    /// wait at the next suspension point without issuing further fetches.
    pub async fn wait_for_completion(
        &self,
        id: &JobId,
        options: WaitOptions,
    ) -> Result<Job, SdkError> {
        let started = Instant::now();

        loop {
            // Deadline check runs before each fetch: a wait that is already
            // out of budget must not touch the network again.
            let elapsed = started.elapsed();
            if elapsed > options.timeout {
                return Err(SdkError::WaitTimeout {
                    id: id.clone(),
                    elapsed,
                });
            }

            let job = self.get(id).await?;
            match job.status {
                JobStatus::Completed => return Ok(job),
                JobStatus::Failed => {
                    return Err(SdkError::JobFailed {
                        id: id.clone(),
                        detail: job
                            .error
                            .unwrap_or_else(|| "no error detail reported".to_string()),
                    })
                }
                JobStatus::Cancelled => return Err(SdkError::JobCancelled { id: id.clone() }),
                JobStatus::Pending | JobStatus::Running => {}
            }

            tracing::debug!(
                job = %id,
                status = job.status.as_str(),
                "Job not terminal yet; sleeping"
            );
            Delay::new(options.poll_interval).await;
        }
    }
}
