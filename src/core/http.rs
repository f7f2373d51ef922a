//! HTTP endpoint server using Axum

use axum::{
    extract::{rejection::JsonRejection, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

use crate::config::Config;
use crate::indicators::registry::IndicatorCategory;
use crate::metrics::Metrics;
use crate::models::{AggregationResult, PriceSeries};
use crate::signals::engine::SignalAggregator;

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub aggregator: Arc<SignalAggregator>,
}

impl AppState {
    pub fn new(aggregator: SignalAggregator, metrics: Arc<Metrics>) -> Self {
        Self {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics,
            start_time: Arc::new(Instant::now()),
            aggregator: Arc::new(aggregator),
        }
    }
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "signal-consensus",
        "indicators": state.aggregator.registry().len(),
        "min_bars": state.aggregator.min_bars(),
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    state.metrics.http_requests_in_flight.dec();

    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Serialize)]
struct IndicatorInfo {
    name: String,
    category: IndicatorCategory,
    lookback: usize,
}

/// Ordered indicator table
async fn list_indicators(State(state): State<AppState>) -> Json<Value> {
    let indicators: Vec<IndicatorInfo> = state
        .aggregator
        .registry()
        .iter()
        .map(|spec| IndicatorInfo {
            name: spec.name.clone(),
            category: spec.category,
            lookback: spec.lookback,
        })
        .collect();

    Json(json!({
        "min_bars": state.aggregator.min_bars(),
        "indicators": indicators,
    }))
}

/// Aggregate a posted OHLCV series.
///
/// Malformed series (mismatched lengths, missing columns, non-numeric values)
/// are rejected with 422; insufficient history answers 200 with LOADING.
async fn aggregate_signals(
    State(state): State<AppState>,
    payload: Result<Json<PriceSeries>, JsonRejection>,
) -> Response {
    let Json(series) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Rejected malformed series");
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "error": "malformed_input",
                    "message": rejection.body_text(),
                })),
            )
                .into_response();
        }
    };

    let start = Instant::now();
    let bars = series.len();
    let result: AggregationResult = state.aggregator.run(series).await;
    state.metrics.record_aggregation(&result, start.elapsed());

    tracing::debug!(bars = bars, verdict = %result.verdict, "Served aggregation");
    Json(result).into_response()
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/indicators", get(list_indicators))
        .route("/api/signals/aggregate", post(aggregate_signals))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let state = AppState::new(SignalAggregator::new(config), metrics);
    let app = create_router(state);

    let port = config.server.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
