//! Unit tests for Ichimoku lines

use signal_consensus::indicators::trend::calculate_ichimoku;

use crate::fixtures::uptrend;

#[test]
fn test_ichimoku_conversion_leads_in_uptrend() {
    let ichimoku = calculate_ichimoku(&uptrend(60), 9, 26, 52, 26).unwrap();
    assert!(ichimoku.conversion > ichimoku.base);
    assert!((ichimoku.span_a - (ichimoku.conversion + ichimoku.base) / 2.0).abs() < 1e-12);
    assert!(ichimoku.span_b.is_some());
    assert_eq!(ichimoku.displacement, 26);
}

#[test]
fn test_ichimoku_span_b_optional_on_short_history() {
    let ichimoku = calculate_ichimoku(&uptrend(50), 9, 26, 52, 26).unwrap();
    assert!(ichimoku.span_b.is_none());
}

#[test]
fn test_ichimoku_insufficient_data() {
    assert!(calculate_ichimoku(&uptrend(25), 9, 26, 52, 26).is_err());
}
