//! Unit tests for the indicator table

use signal_consensus::config::{IndicatorParams, VoteThresholds};
use signal_consensus::indicators::registry::{IndicatorCategory, IndicatorRegistry, IndicatorSpec};
use signal_consensus::indicators::IndicatorError;
use signal_consensus::models::{IndicatorReading, PriceSeries};
use signal_consensus::signals::VoteRule;

const STANDARD_NAMES: [&str; 20] = [
    "SMA (50)",
    "EMA (20)",
    "MACD (12,26,9)",
    "ADX (14)",
    "Parabolic SAR",
    "Ichimoku (9,26)",
    "ATR Trend Follow (14)",
    "RSI (14)",
    "Stochastic (14,3)",
    "CCI (20)",
    "Williams %R (14)",
    "ROC (12)",
    "Bollinger Bands (20,2)",
    "ATR Trend (14)",
    "Donchian Breakout (20)",
    "Keltner (20)",
    "OBV",
    "MFI (14)",
    "VWAP",
    "Accumulation (5)",
];

fn constant(
    _series: &PriceSeries,
    _params: &IndicatorParams,
) -> Result<IndicatorReading, IndicatorError> {
    Ok(IndicatorReading::directional(1.0, 0.0))
}

#[test]
fn test_standard_table_order() {
    let registry = IndicatorRegistry::default();
    assert_eq!(registry.len(), 20);
    assert_eq!(registry.names(), STANDARD_NAMES.to_vec());
}

#[test]
fn test_standard_table_grouped_by_category() {
    let registry = IndicatorRegistry::default();
    let categories: Vec<IndicatorCategory> = registry.iter().map(|spec| spec.category).collect();
    assert!(categories.windows(2).all(|pair| pair[0] <= pair[1]));

    let count = |category: IndicatorCategory| categories.iter().filter(|c| **c == category).count();
    assert_eq!(count(IndicatorCategory::Trend), 7);
    assert_eq!(count(IndicatorCategory::Momentum), 5);
    assert_eq!(count(IndicatorCategory::Volatility), 4);
    assert_eq!(count(IndicatorCategory::Volume), 4);
}

#[test]
fn test_min_bars_is_longest_lookback() {
    let registry = IndicatorRegistry::default();
    assert_eq!(registry.min_bars(), 50);

    let params = IndicatorParams {
        sma_period: 30,
        ..IndicatorParams::default()
    };
    let shorter = IndicatorRegistry::standard(&params, &VoteThresholds::default());
    assert_eq!(shorter.names()[0], "SMA (30)");
    // MACD (26 + 9 - 1) is now the longest
    assert_eq!(shorter.min_bars(), 34);
}

#[test]
fn test_custom_table_sorted_into_category_order() {
    let registry = IndicatorRegistry::with_specs(vec![
        IndicatorSpec::new("volume a", IndicatorCategory::Volume, 1, constant, VoteRule::Directional),
        IndicatorSpec::new("trend a", IndicatorCategory::Trend, 3, constant, VoteRule::Directional),
        IndicatorSpec::new("volume b", IndicatorCategory::Volume, 2, constant, VoteRule::Directional),
        IndicatorSpec::new("trend b", IndicatorCategory::Trend, 1, constant, VoteRule::Directional),
    ]);

    assert_eq!(registry.names(), vec!["trend a", "trend b", "volume a", "volume b"]);
    assert_eq!(registry.min_bars(), 3);
}

#[test]
fn test_empty_table() {
    let registry = IndicatorRegistry::with_specs(Vec::new());
    assert!(registry.is_empty());
    assert_eq!(registry.min_bars(), 0);
}

#[test]
fn test_category_wire_names() {
    assert_eq!(
        serde_json::to_value(IndicatorCategory::Volatility).unwrap(),
        "volatility"
    );
    assert_eq!(IndicatorCategory::Momentum.as_str(), "momentum");
}
