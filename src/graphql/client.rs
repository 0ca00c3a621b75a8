//! GraphQL sub-client — typed queries over the GraphQL endpoint.

use crate::client::FlowstackClient;
use crate::error::SdkError;
use crate::graphql::GraphqlRequest;
use serde::de::DeserializeOwned;

/// Sub-client for GraphQL operations.
pub struct Graphql<'a> {
    pub(crate) client: &'a FlowstackClient,
}

impl<'a> Graphql<'a> {
    /// Execute a query and decode the `data` payload into `T`.
    pub async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<T, SdkError> {
        let mut request = GraphqlRequest::new(query);
        if let Some(v) = variables {
            request = request.variables(v);
        }
        self.request(request).await
    }

    /// Execute a fully-specified request (variables + operation name).
    ///
    /// A non-empty `errors` array fails the call with all messages
    /// combined into one [`SdkError::Graphql`].
    pub async fn request<T: DeserializeOwned>(
        &self,
        request: GraphqlRequest,
    ) -> Result<T, SdkError> {
        let resp = self.client.http.graphql(&request).await?;

        if let Some(combined) = resp.combined_errors() {
            return Err(SdkError::Graphql(combined));
        }

        let data = resp
            .data
            .ok_or_else(|| SdkError::Graphql("response carried neither data nor errors".to_string()))?;
        Ok(serde_json::from_value(data)?)
    }
}
