//! Workflows sub-client — list, fetch, run.

use crate::client::FlowstackClient;
use crate::domain::job::client::WaitOptions;
use crate::domain::job::wire::JobAccepted;
use crate::domain::job::Job;
use crate::domain::workflow::wire::{RunWorkflowRequest, WorkflowResponse, WorkflowsResponse};
use crate::domain::workflow::RunOptions;
use crate::error::SdkError;
use std::collections::HashMap;

/// Sub-client for workflow operations.
pub struct Workflows<'a> {
    pub(crate) client: &'a FlowstackClient,
}

impl<'a> Workflows<'a> {
    /// List workflows.
    pub async fn list(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<WorkflowsResponse, SdkError> {
        Ok(self.client.http.list_workflows(page, limit).await?)
    }

    /// Get a workflow by id.
    pub async fn get(&self, workflow_id: &str) -> Result<WorkflowResponse, SdkError> {
        Ok(self.client.http.get_workflow(workflow_id).await?)
    }

    /// Start a workflow run. Runs are always asynchronous server-side.
    pub async fn run(
        &self,
        workflow_id: &str,
        inputs: HashMap<String, serde_json::Value>,
        options: Option<RunOptions>,
    ) -> Result<JobAccepted, SdkError> {
        let request = RunWorkflowRequest { inputs, options };
        Ok(self.client.http.run_workflow(workflow_id, &request).await?)
    }

    /// Start a run and block until its job reaches a terminal state.
    pub async fn run_and_wait(
        &self,
        workflow_id: &str,
        inputs: HashMap<String, serde_json::Value>,
        options: Option<RunOptions>,
        wait: WaitOptions,
    ) -> Result<Job, SdkError> {
        let accepted = self.run(workflow_id, inputs, options).await?;
        self.client
            .jobs()
            .wait_for_completion(&accepted.job_id, wait)
            .await
    }
}
