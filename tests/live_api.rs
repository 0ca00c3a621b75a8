//! Integration tests against the live Flowstack API.
//!
//! All tests are `#[ignore]` because they require network access and a
//! real API key. Put `FLOWSTACK_API_KEY` (and optionally
//! `FLOWSTACK_API_URL`) in the environment or a `.env` file, then run:
//!
//! ```bash
//! cargo test --test live_api -- --ignored
//! ```

use flowstack_sdk::prelude::*;

fn live_client() -> FlowstackClient {
    dotenvy::dotenv().ok();
    let api_key = std::env::var("FLOWSTACK_API_KEY").expect("FLOWSTACK_API_KEY must be set");

    let mut builder = FlowstackClient::builder().api_key(&api_key);
    if let Ok(url) = std::env::var("FLOWSTACK_API_URL") {
        builder = builder.base_url(&url);
    }
    builder.build().expect("client should build")
}

#[tokio::test]
#[ignore]
async fn list_tools_returns_a_page() {
    let client = live_client();
    let listing = client.tools().list(None, Some(5)).await.expect("list tools");
    assert!(listing.tools.len() <= 5);
}

#[tokio::test]
#[ignore]
async fn graphql_endpoint_answers_a_trivial_query() {
    let client = live_client();
    let value: serde_json::Value = client
        .graphql()
        .query("query { tools(limit: 1) { id name } }", None)
        .await
        .expect("graphql query");
    assert!(value.get("tools").is_some());
}

#[tokio::test]
#[ignore]
async fn unknown_job_is_not_found() {
    let client = live_client();
    let err = client
        .jobs()
        .get(&JobId::from("job_does_not_exist"))
        .await
        .expect_err("missing job should error");
    assert!(matches!(err, SdkError::Http(HttpError::NotFound(_))));
}
