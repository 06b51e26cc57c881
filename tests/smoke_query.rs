use gqlrace::{Client, ClientConfig, JsonParser, Request};

#[cfg_attr(miri, ignore)]
#[tokio::test]
async fn smoke_live_query() {
    let endpoint = match std::env::var("GQLRACE_URL") {
        Ok(endpoint) => endpoint,
        Err(_) => return,
    };
    let query = std::env::var("GQLRACE_QUERY").unwrap_or_else(|_| "query { __typename }".to_string());

    let client = Client::new(ClientConfig::new(endpoint)).expect("client");
    let request = Request::new(
        query,
        serde_json::json!({}),
        JsonParser::<serde_json::Value>::new(),
    );
    let result = client.execute(request).await.expect("graphql query");

    assert!(!result.value.is_null());
}
