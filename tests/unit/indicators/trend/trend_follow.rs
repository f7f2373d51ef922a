//! Unit tests for the ATR trend-follow check

use signal_consensus::config::IndicatorParams;
use signal_consensus::indicators::trend::{calculate_trend_follow, trend_follow_reading};
use signal_consensus::models::IndicatorReading;

use crate::fixtures::{series_from_closes, uptrend};

#[test]
fn test_hurdle_is_previous_close_plus_atr() {
    let check = calculate_trend_follow(&uptrend(40), 14, 1.0).unwrap();
    assert!((check.hurdle() - (check.previous_close + check.atr)).abs() < 1e-12);
}

#[test]
fn test_gradual_rise_does_not_clear_hurdle() {
    // each bar rises 0.5 while the true range is 0.8
    let reading = trend_follow_reading(&uptrend(40), &IndicatorParams::default()).unwrap();
    match reading {
        IndicatorReading::Directional { probe, reference } => assert!(probe < reference),
        other => panic!("unexpected reading {:?}", other),
    }
}

#[test]
fn test_gap_up_clears_hurdle() {
    let mut closes = vec![100.0; 30];
    closes.push(110.0);
    let series = series_from_closes(&closes, 0.5, 0.5, 1000.0);
    let check = calculate_trend_follow(&series, 14, 1.0).unwrap();
    assert!(check.close > check.hurdle());
}
