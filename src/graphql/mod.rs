//! GraphQL surface — wire types for the platform's single GraphQL endpoint.
//!
//! The endpoint lives alongside REST at `POST /api/v1/graphql` and speaks
//! the standard shape: `{query, variables?, operationName?}` in,
//! `{data?, errors?}` out.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};

/// GraphQL request body.
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<serde_json::Value>,
    #[serde(rename = "operationName", skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

impl GraphqlRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
            operation_name: None,
        }
    }

    pub fn variables(mut self, variables: serde_json::Value) -> Self {
        self.variables = Some(variables);
        self
    }

    pub fn operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }
}

/// GraphQL response wrapper.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse {
    pub data: Option<serde_json::Value>,
    pub errors: Option<Vec<GraphqlError>>,
}

/// A single server-reported GraphQL error.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

impl GraphqlResponse {
    /// Combine a non-empty `errors` array into one message.
    pub fn combined_errors(&self) -> Option<String> {
        match &self.errors {
            Some(errors) if !errors.is_empty() => Some(
                errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_absent_fields() {
        let request = GraphqlRequest::new("query { tools { id } }");
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("query"));
        assert!(!json.contains("variables"));
        assert!(!json.contains("operationName"));
    }

    #[test]
    fn test_request_serializes_operation_name_camel_case() {
        let request = GraphqlRequest::new("query ListTools { tools { id } }")
            .operation_name("ListTools")
            .variables(serde_json::json!({"limit": 5}));
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"operationName\":\"ListTools\""));
        assert!(json.contains("\"limit\":5"));
    }

    #[test]
    fn test_combined_errors_joins_all_messages() {
        let resp: GraphqlResponse = serde_json::from_str(
            r#"{"errors": [{"message": "first"}, {"message": "second"}]}"#,
        )
        .unwrap();
        assert_eq!(resp.combined_errors().unwrap(), "first; second");
    }

    #[test]
    fn test_combined_errors_empty_array_is_success() {
        let resp: GraphqlResponse =
            serde_json::from_str(r#"{"data": {"ok": true}, "errors": []}"#).unwrap();
        assert!(resp.combined_errors().is_none());
    }
}
