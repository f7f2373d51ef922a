//! Unit tests for EMA indicator

use signal_consensus::indicators::trend::{calculate_ema, calculate_emas};

use crate::fixtures::{flat, uptrend};

#[test]
fn test_ema_insufficient_data() {
    let series = uptrend(10);
    assert!(calculate_ema(&series, 20).is_err());
}

#[test]
fn test_ema_sufficient_data() {
    let series = uptrend(50);
    let ema = calculate_ema(&series, 12).unwrap();
    assert_eq!(ema.period, 12);
    assert!(ema.value.is_finite());
    // lags a rising series
    assert!(ema.value < series.last_close().unwrap());
}

#[test]
fn test_ema_of_constant_series() {
    let series = flat(30, 42.0);
    let ema = calculate_ema(&series, 10).unwrap();
    assert!((ema.value - 42.0).abs() < 1e-9);
}

#[test]
fn test_calculate_multiple_emas() {
    let series = uptrend(100);
    let emas = calculate_emas(&series, &[12, 26, 50, 200]);
    assert_eq!(emas.len(), 3);
    assert_eq!(emas[2].period, 50);
}
