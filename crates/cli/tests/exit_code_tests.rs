//! Integration tests for structured exit codes.
//!
//! These tests verify that osdoctor returns the correct exit codes for the
//! three outcome classes: success (0), operation error (1), and
//! configuration error (2).

mod common;

use common::{osdoctor_cmd, osdoctor_cmd_with_endpoint};
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn health_body() -> serde_json::Value {
    serde_json::json!({
        "cluster_name": "search-prod",
        "status": "green",
        "timed_out": false,
        "number_of_nodes": 3,
        "number_of_data_nodes": 3,
        "active_primary_shards": 10,
        "active_shards": 20,
        "relocating_shards": 0,
        "initializing_shards": 0,
        "unassigned_shards": 0,
        "active_shards_percent_as_number": 100.0
    })
}

/// Successful commands return exit code 0.
#[tokio::test]
async fn test_success_returns_exit_code_0() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_cluster/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(health_body()))
        .mount(&server)
        .await;

    let mut cmd = osdoctor_cmd_with_endpoint(&server.uri());
    cmd.arg("health").assert().code(0);
}

/// A failing cluster call degrades to an error block and exit code 1.
#[tokio::test]
async fn test_server_error_returns_exit_code_1() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_cluster/health"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let mut cmd = osdoctor_cmd_with_endpoint(&server.uri());
    cmd.arg("health")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Error: API error (500)"))
        .stdout(predicate::str::contains("boom"));
}

/// An unreachable endpoint is an operation error, not a config error.
#[test]
fn test_connection_refused_returns_exit_code_1() {
    // Port 1 is essentially never listening
    let mut cmd = osdoctor_cmd_with_endpoint("http://127.0.0.1:1");
    cmd.arg("health")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Error: "));
}

/// A missing endpoint fails config validation with exit code 2.
#[test]
fn test_missing_endpoint_returns_exit_code_2() {
    let mut cmd = osdoctor_cmd();
    cmd.arg("health")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to load configuration"));
}

/// Missing credentials fail config validation with exit code 2.
#[test]
fn test_missing_credentials_returns_exit_code_2() {
    let mut cmd = osdoctor_cmd_with_endpoint("http://127.0.0.1:9200");
    cmd.env_remove("OPENSEARCH_USERNAME")
        .env_remove("OPENSEARCH_PASSWORD");
    cmd.arg("health")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to load configuration"));
}

/// An out-of-range timeout fails config validation with exit code 2.
#[test]
fn test_zero_timeout_returns_exit_code_2() {
    let mut cmd = osdoctor_cmd_with_endpoint("http://127.0.0.1:9200");
    cmd.env("OPENSEARCH_TIMEOUT", "0");
    cmd.arg("health").assert().code(2);
}

/// A malformed search body is caught before any request and exits 1.
#[test]
fn test_invalid_search_body_returns_exit_code_1() {
    let mut cmd = osdoctor_cmd_with_endpoint("http://127.0.0.1:9200");
    cmd.args(["search", "logs-*", "{not json"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with(
            "Error: search body is not valid JSON",
        ));
}

/// Discover URLs without a configured Dashboards base exit 1.
#[test]
fn test_discover_url_without_dashboards_base_returns_exit_code_1() {
    let mut cmd = osdoctor_cmd_with_endpoint("http://127.0.0.1:9200");
    cmd.args([
        "discover-url",
        "--query",
        "level:ERROR",
        "--index-pattern-id",
        "abc-123",
        "--from",
        "now-15m",
        "--to",
        "now",
    ])
    .assert()
    .code(1)
    .stdout(predicate::str::contains(
        "Error: dashboards base URL is not configured",
    ));
}
