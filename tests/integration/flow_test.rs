//! End-to-end flow: resolve a request, run it, save the result.

use chrono::NaiveDate;
use clap::Parser;
use mockito::Server;
use realtime_query::app::{run_query, QueryRequest};
use realtime_query::cli::Cli;
use realtime_query::config::Config;
use realtime_query::output::{write_result, WriteOutcome};
use realtime_query::query::QueryExecutor;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
}

#[tokio::test]
async fn test_query_saved_to_file() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/metrics/graphql")
        .with_status(200)
        .with_body(r#"{"data": {"httpMetrics": [{"host": "a.example", "count": 42}]}}"#)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("result.json");
    let url = server.url();
    let cli = Cli::parse_from([
        "rtq",
        "-P",
        "metrics",
        "-f",
        "host",
        "--from",
        "2024-03-25",
        "--to",
        "2024-03-31",
        "--base-url",
        url.as_str(),
        "-o",
        output.to_str().unwrap(),
    ]);

    let request = QueryRequest::resolve(&cli, &Config::default(), today()).unwrap();
    let executor = QueryExecutor::new(request.base_url.clone()).unwrap();
    let (query, result) = run_query(&executor, &request, "key").await.unwrap();

    assert!(query.text().contains("groupBy: [host],"));
    assert!(matches!(
        write_result(&result, &request.output).unwrap(),
        WriteOutcome::File { .. }
    ));

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(saved["httpMetrics"][0]["count"], 42);
}

#[tokio::test]
async fn test_empty_result_writes_nothing() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/events/graphql")
        .with_status(200)
        .with_body(r#"{"data": {"httpEvents": []}}"#)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("result.json");
    let url = server.url();
    let cli = Cli::parse_from([
        "rtq",
        "--base-url",
        url.as_str(),
        "-o",
        output.to_str().unwrap(),
    ]);

    let request = QueryRequest::resolve(&cli, &Config::default(), today()).unwrap();
    let executor = QueryExecutor::new(request.base_url.clone()).unwrap();
    let (_, result) = run_query(&executor, &request, "key").await.unwrap();

    assert_eq!(write_result(&result, &output).unwrap(), WriteOutcome::Empty);
    assert!(!output.exists());
}
