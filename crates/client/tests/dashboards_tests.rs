//! Saved-object (index pattern) endpoint tests.

mod common;

use common::*;
use wiremock::matchers::{body_partial_json, method, path};

#[tokio::test]
async fn test_find_index_patterns_strips_id_prefix() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/.kibana/_search"))
        .and(body_partial_json(serde_json::json!({
            "query": {"term": {"type": "index-pattern"}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "took": 1,
            "hits": {
                "total": {"value": 2},
                "hits": [
                    {
                        "_id": "index-pattern:abc-123",
                        "_source": {"index-pattern": {"title": "logs-*"}}
                    },
                    {
                        "_id": "index-pattern:def-456",
                        "_source": {"index-pattern": {"title": "metrics-*"}}
                    }
                ]
            }
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let patterns =
        endpoints::find_index_patterns(&client, &mock_server.uri(), &test_credentials())
            .await
            .unwrap();

    assert_eq!(patterns.len(), 2);
    assert_eq!(patterns[0].title, "logs-*");
    assert_eq!(patterns[0].id, "abc-123");
    assert_eq!(patterns[1].id, "def-456");
}

#[tokio::test]
async fn test_find_index_patterns_empty_hits() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/.kibana/_search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "hits": {"hits": []}
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let patterns =
        endpoints::find_index_patterns(&client, &mock_server.uri(), &test_credentials())
            .await
            .unwrap();

    assert!(patterns.is_empty());
}

#[tokio::test]
async fn test_find_index_patterns_malformed_hit() {
    let mock_server = MockServer::start().await;

    // A hit without the index-pattern source object is a schema drift we
    // surface rather than silently drop.
    Mock::given(method("POST"))
        .and(path("/.kibana/_search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "hits": {
                "hits": [
                    {"_id": "index-pattern:abc-123", "_source": {}}
                ]
            }
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::find_index_patterns(&client, &mock_server.uri(), &test_credentials())
        .await
        .unwrap_err();

    match err {
        opensearch_client::ClientError::InvalidResponse(message) => {
            assert!(message.contains("index pattern"));
        }
        other => panic!("expected InvalidResponse, got: {other:?}"),
    }
}
