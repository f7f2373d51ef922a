//! Integration tests for the API Server
//!
//! Tests HTTP endpoints, health checks, metrics, and aggregation.


use serde_json::{json, Value};
use signal_consensus::config::{AggregationSettings, Config};

use test_utils::{uptrend_body, TestApiServer};

#[tokio::test]
async fn health_endpoint_reports_healthy_status() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["service"], "signal-consensus");
    assert_eq!(body["indicators"], 20);
    assert_eq!(body["min_bars"], 50);
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(
        body.contains("http_requests_total"),
        "Expected http_requests_total metric"
    );
    assert!(
        body.contains("http_request_duration_seconds"),
        "Expected http_request_duration_seconds metric"
    );
    assert!(
        body.contains("http_requests_in_flight"),
        "Expected http_requests_in_flight metric"
    );
}

#[tokio::test]
async fn indicators_endpoint_lists_table_in_order() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/indicators").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["min_bars"], 50);

    let indicators = body["indicators"].as_array().expect("indicator list");
    assert_eq!(indicators.len(), 20);
    assert_eq!(
        indicators[0],
        json!({"name": "SMA (50)", "category": "trend", "lookback": 50})
    );
    assert_eq!(indicators[7]["name"], "RSI (14)");
    assert_eq!(indicators[7]["category"], "momentum");
    assert_eq!(indicators[19]["name"], "Accumulation (5)");
    assert_eq!(indicators[19]["category"], "volume");
}

#[tokio::test]
async fn aggregate_uptrend_returns_bullish_verdict() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/signals/aggregate")
        .json(&uptrend_body(120))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let verdict = body["verdict"].as_str().expect("verdict label");
    assert!(
        verdict == "BUY" || verdict == "STRONG_BUY",
        "unexpected verdict {}",
        verdict
    );

    let details = body["details"].as_array().expect("detail list");
    assert_eq!(details.len(), 20);
    assert_eq!(details[0], json!({"name": "SMA (50)", "signal": "BUY"}));

    let summary = &body["summary"];
    let total = summary["buy"].as_u64().unwrap()
        + summary["sell"].as_u64().unwrap()
        + summary["neutral"].as_u64().unwrap();
    assert_eq!(total, 20);
    assert!(body["score"].as_i64().unwrap() >= 2);
    assert!(body["color"] == "green" || body["color"] == "darkgreen");
}

#[tokio::test]
async fn aggregate_short_series_returns_loading() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/signals/aggregate")
        .json(&uptrend_body(30))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["verdict"], "LOADING");
    assert_eq!(body["score"], 0);
    assert_eq!(body["color"], "gray");
    assert_eq!(body["details"], json!([]));
}

#[tokio::test]
async fn aggregate_rejects_mismatched_columns() {
    let app = TestApiServer::new().await;
    let mut body = uptrend_body(60);
    body["volume"] = json!(vec![1000.0; 59]);

    let response = app.server.post("/api/signals/aggregate").json(&body).await;
    assert_eq!(response.status_code(), 422);

    let error: Value = response.json();
    assert_eq!(error["error"], "malformed_input");
    assert!(error["message"].as_str().is_some());
}

#[tokio::test]
async fn aggregate_rejects_missing_column() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/signals/aggregate")
        .json(&json!({"close": [1.0, 2.0, 3.0]}))
        .await;
    assert_eq!(response.status_code(), 422);
}

#[tokio::test]
async fn aggregate_concurrent_mode_matches_inline() {
    let inline = TestApiServer::new().await;
    let concurrent = TestApiServer::with_config(&Config {
        aggregation: AggregationSettings {
            timeout_ms: 3_000,
            concurrent: true,
        },
        ..Config::default()
    });

    let body = uptrend_body(120);
    let expected: Value = inline
        .server
        .post("/api/signals/aggregate")
        .json(&body)
        .await
        .json();
    let actual: Value = concurrent
        .server
        .post("/api/signals/aggregate")
        .json(&body)
        .await
        .json();
    assert_eq!(actual, expected);
}

#[tokio::test]
async fn metrics_track_aggregations_by_verdict() {
    let app = TestApiServer::new().await;
    let _ = app
        .server
        .post("/api/signals/aggregate")
        .json(&uptrend_body(10))
        .await;

    let body = app.server.get("/metrics").await.text();
    assert!(body.contains("aggregations_total{verdict=\"LOADING\"} 1"));
    assert!(body.contains("aggregation_duration_seconds"));
}

#[tokio::test]
async fn api_server_is_stateless() {
    let app = TestApiServer::new().await;
    let body = uptrend_body(120);

    let first: Value = app
        .server
        .post("/api/signals/aggregate")
        .json(&body)
        .await
        .json();
    let second: Value = app
        .server
        .post("/api/signals/aggregate")
        .json(&body)
        .await
        .json();
    assert_eq!(first, second);
}
