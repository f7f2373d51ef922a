//! Unit tests for the aggregation pipeline

use std::sync::Arc;
use std::time::Duration;

use signal_consensus::config::{AggregationSettings, Config, IndicatorParams};
use signal_consensus::indicators::registry::{IndicatorCategory, IndicatorRegistry, IndicatorSpec};
use signal_consensus::indicators::IndicatorError;
use signal_consensus::models::{IndicatorReading, PriceSeries, SeriesError, VerdictLabel, Vote};
use signal_consensus::signals::{SignalAggregator, VerdictBands, VoteRule, MIN_CANDLES};

use crate::fixtures::uptrend;

fn bullish(
    _series: &PriceSeries,
    _params: &IndicatorParams,
) -> Result<IndicatorReading, IndicatorError> {
    Ok(IndicatorReading::directional(2.0, 1.0))
}

fn failing(
    series: &PriceSeries,
    _params: &IndicatorParams,
) -> Result<IndicatorReading, IndicatorError> {
    Err(IndicatorError::InsufficientData {
        required: series.len() + 1,
        got: series.len(),
    })
}

fn not_a_number(
    _series: &PriceSeries,
    _params: &IndicatorParams,
) -> Result<IndicatorReading, IndicatorError> {
    Ok(IndicatorReading::banded(f64::NAN))
}

fn slow(
    _series: &PriceSeries,
    _params: &IndicatorParams,
) -> Result<IndicatorReading, IndicatorError> {
    std::thread::sleep(Duration::from_millis(300));
    Ok(IndicatorReading::directional(2.0, 1.0))
}

fn panicking(
    _series: &PriceSeries,
    _params: &IndicatorParams,
) -> Result<IndicatorReading, IndicatorError> {
    panic!("indicator blew up");
}

fn custom(compute: signal_consensus::indicators::ComputeFn) -> IndicatorRegistry {
    IndicatorRegistry::with_specs(vec![
        IndicatorSpec::new("first", IndicatorCategory::Trend, 5, bullish, VoteRule::Directional),
        IndicatorSpec::new("second", IndicatorCategory::Momentum, 5, compute, VoteRule::Directional),
        IndicatorSpec::new("third", IndicatorCategory::Volume, 5, bullish, VoteRule::Directional),
    ])
}

fn concurrent_config(timeout_ms: u64) -> Config {
    Config {
        aggregation: AggregationSettings {
            timeout_ms,
            concurrent: true,
        },
        ..Config::default()
    }
}

#[test]
fn test_min_bars_matches_reference_window() {
    let aggregator = SignalAggregator::default();
    assert_eq!(aggregator.min_bars(), MIN_CANDLES);
    assert_eq!(aggregator.registry().len(), 20);
    assert_eq!(*aggregator.bands(), VerdictBands::default());
}

#[test]
fn test_insufficient_history_returns_loading() {
    let aggregator = SignalAggregator::default();
    let result = aggregator.aggregate(&uptrend(MIN_CANDLES - 1));
    assert_eq!(result, signal_consensus::AggregationResult::loading());
}

#[test]
fn test_exactly_min_bars_votes() {
    let aggregator = SignalAggregator::default();
    let result = aggregator.aggregate(&uptrend(MIN_CANDLES));
    assert!(!result.is_loading());
    assert_eq!(result.details.len(), 20);
}

#[test]
fn test_details_follow_table_order() {
    let aggregator = SignalAggregator::default();
    let result = aggregator.aggregate(&uptrend(120));
    let names: Vec<&str> = result.details.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, aggregator.registry().names());
    assert_eq!(result.summary.total(), 20);
    assert_eq!(
        result.score,
        result.summary.buy as i32 - result.summary.sell as i32
    );
    assert!((0.0..=1.0).contains(&result.confidence));
    assert_eq!(result.color, result.verdict.color());
}

#[test]
fn test_aggregation_is_idempotent() {
    let aggregator = SignalAggregator::default();
    let series = uptrend(120);
    assert_eq!(aggregator.aggregate(&series), aggregator.aggregate(&series));
}

#[test]
fn test_single_failure_voids_call() {
    let aggregator = SignalAggregator::with_registry(&Config::default(), custom(failing));
    let result = aggregator.aggregate(&uptrend(10));
    assert!(result.is_loading());
    assert_eq!(result.summary.total(), 0);
}

#[test]
fn test_non_finite_reading_voids_call() {
    let aggregator = SignalAggregator::with_registry(&Config::default(), custom(not_a_number));
    assert!(aggregator.aggregate(&uptrend(10)).is_loading());
}

#[test]
fn test_custom_table_rederives_bands() {
    let aggregator = SignalAggregator::with_registry(&Config::default(), custom(bullish));
    assert_eq!(aggregator.min_bars(), 5);
    assert_eq!(
        *aggregator.bands(),
        VerdictBands::for_indicator_count(3)
    );

    let result = aggregator.aggregate(&uptrend(10));
    assert_eq!(result.score, 3);
    assert_eq!(result.verdict, VerdictLabel::StrongBuy);
    assert_eq!(result.signal_for("second"), Some(Vote::Buy));
    assert_eq!(result.categories.len(), 3);
}

#[test]
fn test_explicit_bands_override() {
    let aggregator = SignalAggregator::with_registry(&Config::default(), custom(bullish))
        .with_bands(VerdictBands {
            strong: 10,
            moderate: 2,
        });
    assert_eq!(aggregator.aggregate(&uptrend(10)).verdict, VerdictLabel::Buy);
}

#[test]
fn test_aggregate_raw_rejects_mismatched_columns() {
    let aggregator = SignalAggregator::default();
    let result = aggregator.aggregate_raw(
        vec![1.0; 60],
        vec![1.0; 60],
        vec![1.0; 59],
        vec![1.0; 60],
        vec![1.0; 60],
    );
    assert!(matches!(result, Err(SeriesError::LengthMismatch { .. })));
}

#[test]
fn test_aggregate_raw_short_series_is_loading() {
    let aggregator = SignalAggregator::default();
    let result = aggregator
        .aggregate_raw(
            vec![1.0; 10],
            vec![1.0; 10],
            vec![1.0; 10],
            vec![1.0; 10],
            vec![1.0; 10],
        )
        .unwrap();
    assert!(result.is_loading());
}

#[test]
fn test_run_uses_inline_path_by_default() {
    let aggregator = SignalAggregator::default();
    assert!(!aggregator.settings().concurrent);
    let series = uptrend(120);
    let expected = aggregator.aggregate(&series);
    let result = tokio_test::block_on(aggregator.run(series));
    assert_eq!(result, expected);
}

#[tokio::test]
async fn test_concurrent_matches_inline() {
    let aggregator = SignalAggregator::new(&concurrent_config(3_000));
    let series = uptrend(120);
    let inline = aggregator.aggregate(&series);

    let concurrent = aggregator.aggregate_concurrent(Arc::new(series.clone())).await;
    assert_eq!(concurrent, inline);

    let dispatched = aggregator.run(series).await;
    assert_eq!(dispatched, inline);
}

#[tokio::test]
async fn test_concurrent_short_series_is_loading() {
    let aggregator = SignalAggregator::new(&concurrent_config(3_000));
    let result = aggregator.aggregate_concurrent(Arc::new(uptrend(20))).await;
    assert!(result.is_loading());
}

#[tokio::test]
async fn test_concurrent_failure_voids_call() {
    let aggregator = SignalAggregator::with_registry(&concurrent_config(3_000), custom(failing));
    let result = aggregator.aggregate_concurrent(Arc::new(uptrend(10))).await;
    assert!(result.is_loading());
}

#[tokio::test]
async fn test_concurrent_panic_voids_call() {
    let aggregator = SignalAggregator::with_registry(&concurrent_config(3_000), custom(panicking));
    let result = aggregator.aggregate_concurrent(Arc::new(uptrend(10))).await;
    assert!(result.is_loading());
}

#[tokio::test]
async fn test_concurrent_timeout_returns_loading() {
    let aggregator = SignalAggregator::with_registry(&concurrent_config(20), custom(slow));
    let result = aggregator.aggregate_concurrent(Arc::new(uptrend(10))).await;
    assert!(result.is_loading());
}
