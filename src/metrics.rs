//! Prometheus metrics for aggregation calls and the HTTP surface

use std::time::Duration;

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

use crate::models::AggregationResult;

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_requests_in_flight: IntGauge,
    pub http_request_duration_seconds: Histogram,
    pub aggregations_total: IntCounterVec,
    pub aggregation_duration_seconds: Histogram,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total number of HTTP requests")?;
        let http_requests_in_flight = IntGauge::new(
            "http_requests_in_flight",
            "Number of HTTP requests currently being served",
        )?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let aggregations_total = IntCounterVec::new(
            Opts::new("aggregations_total", "Aggregation calls by verdict"),
            &["verdict"],
        )?;
        let aggregation_duration_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "aggregation_duration_seconds",
                "Time spent computing one aggregation",
            )
            .buckets(vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(aggregations_total.clone()))?;
        registry.register(Box::new(aggregation_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_requests_in_flight,
            http_request_duration_seconds,
            aggregations_total,
            aggregation_duration_seconds,
        })
    }

    pub fn record_aggregation(&self, result: &AggregationResult, elapsed: Duration) {
        self.aggregations_total
            .with_label_values(&[result.verdict.as_str()])
            .inc();
        self.aggregation_duration_seconds
            .observe(elapsed.as_secs_f64());
    }

    /// Text exposition format
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
