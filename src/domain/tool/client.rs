//! Tools sub-client — list, search, invoke.

use crate::client::FlowstackClient;
use crate::domain::job::wire::JobAccepted;
use crate::domain::tool::wire::{InvokeToolRequest, ToolResponse, ToolsResponse};
use crate::domain::tool::InvokeOptions;
use crate::error::SdkError;

/// Sub-client for tool operations.
pub struct Tools<'a> {
    pub(crate) client: &'a FlowstackClient,
}

impl<'a> Tools<'a> {
    /// List published tools.
    pub async fn list(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<ToolsResponse, SdkError> {
        Ok(self.client.http.list_tools(page, limit).await?)
    }

    /// Full-text search over tool names and descriptions.
    pub async fn search(
        &self,
        query: &str,
        limit: Option<u32>,
    ) -> Result<Vec<ToolResponse>, SdkError> {
        Ok(self.client.http.search_tools(query, limit).await?)
    }

    /// Get a tool by id.
    pub async fn get(&self, tool_id: &str) -> Result<ToolResponse, SdkError> {
        Ok(self.client.http.get_tool(tool_id).await?)
    }

    /// Invoke a tool synchronously and return its raw output.
    pub async fn invoke(
        &self,
        tool_id: &str,
        input: serde_json::Value,
        options: Option<InvokeOptions>,
    ) -> Result<serde_json::Value, SdkError> {
        let request = InvokeToolRequest { input, options };
        Ok(self.client.http.invoke_tool(tool_id, &request).await?)
    }

    /// Start an asynchronous invocation.
    ///
    /// Returns the accepted job; pass its id to
    /// [`Jobs::wait_for_completion`](crate::domain::job::client::Jobs::wait_for_completion)
    /// to block until the run finishes.
    pub async fn invoke_async(
        &self,
        tool_id: &str,
        input: serde_json::Value,
        options: Option<InvokeOptions>,
    ) -> Result<JobAccepted, SdkError> {
        let request = InvokeToolRequest { input, options };
        Ok(self.client.http.invoke_tool_async(tool_id, &request).await?)
    }
}
