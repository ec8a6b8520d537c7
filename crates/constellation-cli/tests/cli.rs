//! CLI tests against a mock Constellation instance.

mod common;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{run_cli, run_cli_failure, run_cli_success};

const TARGET: &str = "at://did:plc:example/app.bsky.feed.post/x";

#[tokio::test(flavor = "multi_thread")]
async fn test_info() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "help": "docs live at the root URL",
            "days_indexed": 99,
            "stats": {"dids": 10, "targetables": 20, "linking_records": 30}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_success(&server.uri(), &["info"]);

    assert!(stdout.contains("Days indexed: 99"));
    assert!(stdout.contains("Linking records: 30"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_links_prints_one_record_per_line() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/links"))
        .and(query_param("target", TARGET))
        .and(query_param("collection", "app.bsky.feed.like"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 5,
            "linking_records": [
                {"did": "did:plc:alice", "collection": "app.bsky.feed.like", "rkey": "3la1"},
                {"did": "did:plc:bob", "collection": "app.bsky.feed.like", "rkey": "3la2"}
            ],
            "cursor": "abc"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(
        &server.uri(),
        &[
            "links",
            "--target",
            TARGET,
            "--collection",
            "app.bsky.feed.like",
            "--limit",
            "2",
        ],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["did"], "did:plc:bob");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Next cursor: abc"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_count() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/links/count"))
        .and(query_param("target", TARGET))
        .and(query_param("path", ".subject.uri"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_success(
        &server.uri(),
        &["count", "--target", TARGET, "--path", ".subject.uri"],
    );

    assert!(stdout.contains("Total: 42"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_dids() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/links/distinct-dids"))
        .and(query_param("target", "did:plc:target"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 2,
            "linking_dids": ["did:plc:one", "did:plc:two"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_success(&server.uri(), &["dids", "--target", "did:plc:target"]);

    assert_eq!(stdout.lines().collect::<Vec<_>>(), ["did:plc:one", "did:plc:two"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_dids_count_forwards_paging() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/links/count/distinct-dids"))
        .and(query_param("limit", "4"))
        .and(query_param("cursor", "c"))
        .and(query_param_is_missing("collection"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 8})))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_success(
        &server.uri(),
        &["dids-count", "--target", TARGET, "--limit", "4", "--cursor", "c"],
    );

    assert!(stdout.contains("Total: 8"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_user_agent_flag() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/links/count"))
        .and(header("user-agent", "my-tool/2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 1})))
        .expect(1)
        .mount(&server)
        .await;

    run_cli_success(
        &server.uri(),
        &["count", "--target", TARGET, "--user-agent", "my-tool/2.0"],
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_empty_target_fails_without_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let stderr = run_cli_failure(&server.uri(), &["links", "--target", ""]);

    assert!(stderr.contains("target parameter is required"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let stderr = run_cli_failure(&server.uri(), &["count", "--target", TARGET]);

    assert!(stderr.contains("503"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_info_logs_service_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "days_indexed": 1,
            "error": "index is rebuilding"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(&server.uri(), &["info"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(stderr.contains("WARN"));
    assert!(stderr.contains("Service reported an error"));
    assert!(stderr.contains("index is rebuilding"));
}

#[test]
fn test_version_flag() {
    let stdout = run_cli_success("http://127.0.0.1:9", &["--version"]);

    assert!(stdout.starts_with("constellation "));
    assert!(stdout.trim().len() > "constellation ".len());
}
