//! Query execution against a simulated analytics API.

use chrono::NaiveDate;
use mockito::{Matcher, Server};
use realtime_query::error::QueryError;
use realtime_query::product::ProductType;
use realtime_query::query::{
    build_query, AnalyticsClient, DateRange, FieldSelection, Query, QueryExecutor,
};
use serde_json::json;

fn query(product: ProductType) -> Query {
    let fields = FieldSelection::new(["host", "status"]).unwrap();
    let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
    build_query(product, &fields, &DateRange::new(start, end).unwrap(), None)
}

#[tokio::test]
async fn test_success_returns_data() {
    let mut server = Server::new_async().await;
    let query = query(ProductType::Events);

    let mock = server
        .mock("POST", "/events/graphql")
        .match_header("authorization", "Token secret-key")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({ "query": query.text() })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": {"httpEvents": []}}"#)
        .create_async()
        .await;

    let executor = QueryExecutor::new(server.url()).unwrap();
    let result = executor.execute(&query, "secret-key").await.unwrap();

    assert_eq!(result.data(), &json!({"httpEvents": []}));
    assert!(result.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_forbidden_raises_execution_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/events/graphql")
        .with_status(403)
        .with_body("forbidden")
        .create_async()
        .await;

    let executor = QueryExecutor::new(server.url()).unwrap();
    let err = executor
        .execute(&query(ProductType::Events), "bad-key")
        .await
        .unwrap_err();

    assert!(matches!(err, QueryError::QueryExecution(_)));
    assert!(err.to_string().contains("forbidden"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_metrics_query_goes_to_metrics_endpoint() {
    let mut server = Server::new_async().await;
    let events = server
        .mock("POST", "/events/graphql")
        .expect(0)
        .create_async()
        .await;
    let metrics = server
        .mock("POST", "/metrics/graphql")
        .with_status(200)
        .with_body(r#"{"data": {"httpMetrics": [{"host": "a.example", "status": 200}]}}"#)
        .create_async()
        .await;

    let executor = QueryExecutor::new(server.url()).unwrap();
    let result = executor
        .execute(&query(ProductType::Metrics), "key")
        .await
        .unwrap();

    assert_eq!(result.product(), ProductType::Metrics);
    assert_eq!(result.rows().map(Vec::len), Some(1));
    events.assert_async().await;
    metrics.assert_async().await;
}

#[tokio::test]
async fn test_server_error_body_is_raw_text() {
    let mut server = Server::new_async().await;
    let body = r#"{"detail": "internal error"}"#;
    let _mock = server
        .mock("POST", "/metrics/graphql")
        .with_status(500)
        .with_body(body)
        .create_async()
        .await;

    let executor = QueryExecutor::new(server.url()).unwrap();
    let err = executor
        .execute(&query(ProductType::Metrics), "key")
        .await
        .unwrap_err();

    match err {
        QueryError::QueryExecution(raw) => assert_eq!(raw, body),
        other => panic!("Expected QueryExecution, got {:?}", other),
    }
}

#[tokio::test]
async fn test_graphql_errors_with_200() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/events/graphql")
        .with_status(200)
        .with_body(r#"{"data": null, "errors": [{"message": "Unknown field"}]}"#)
        .create_async()
        .await;

    let executor = QueryExecutor::new(server.url()).unwrap();
    let result = executor
        .execute(&query(ProductType::Events), "key")
        .await
        .unwrap();

    assert!(result.is_empty());
    assert_eq!(result.errors(), &["Unknown field".to_string()]);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Nothing listens on port 1
    let executor = QueryExecutor::new("http://127.0.0.1:1").unwrap();
    let err = executor
        .execute(&query(ProductType::Events), "key")
        .await
        .unwrap_err();

    assert!(matches!(err, QueryError::Transport(_)));
    assert_eq!(err.category(), "Transport Error");
}
