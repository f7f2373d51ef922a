//! Unit tests for vote normalization

use signal_consensus::config::Band;
use signal_consensus::indicators::IndicatorError;
use signal_consensus::models::{IndicatorReading, Vote};
use signal_consensus::signals::{normalize, VoteRule};

#[test]
fn test_directional_strictly_greater_buys() {
    let rule = VoteRule::Directional;
    assert_eq!(
        normalize(&IndicatorReading::directional(101.0, 100.0), &rule).unwrap(),
        Vote::Buy
    );
    assert_eq!(
        normalize(&IndicatorReading::directional(99.0, 100.0), &rule).unwrap(),
        Vote::Sell
    );
    // a tie is not bullish
    assert_eq!(
        normalize(&IndicatorReading::directional(100.0, 100.0), &rule).unwrap(),
        Vote::Sell
    );
}

#[test]
fn test_banded_oversold_overbought() {
    let rule = VoteRule::banded(Band::new(30.0, 70.0));
    let vote = |value| normalize(&IndicatorReading::banded(value), &rule).unwrap();
    assert_eq!(vote(25.0), Vote::Buy);
    assert_eq!(vote(75.0), Vote::Sell);
    assert_eq!(vote(50.0), Vote::Neutral);
    assert_eq!(vote(30.0), Vote::Neutral);
    assert_eq!(vote(70.0), Vote::Neutral);
}

#[test]
fn test_banded_negative_scale() {
    let rule = VoteRule::banded(Band::new(-80.0, -20.0));
    let vote = |value| normalize(&IndicatorReading::banded(value), &rule).unwrap();
    assert_eq!(vote(-90.0), Vote::Buy);
    assert_eq!(vote(-10.0), Vote::Sell);
    assert_eq!(vote(-50.0), Vote::Neutral);
}

#[test]
fn test_mean_reversion_channel() {
    let rule = VoteRule::MeanReversion;
    let vote = |price| normalize(&IndicatorReading::channel(price, 90.0, 110.0), &rule).unwrap();
    assert_eq!(vote(85.0), Vote::Buy);
    assert_eq!(vote(115.0), Vote::Sell);
    assert_eq!(vote(100.0), Vote::Neutral);
}

#[test]
fn test_breakout_channel() {
    let rule = VoteRule::Breakout;
    let vote = |price| normalize(&IndicatorReading::channel(price, 90.0, 110.0), &rule).unwrap();
    assert_eq!(vote(115.0), Vote::Buy);
    assert_eq!(vote(85.0), Vote::Sell);
    assert_eq!(vote(110.0), Vote::Neutral);
}

#[test]
fn test_strength_gated() {
    let rule = VoteRule::StrengthGated { threshold: 25.0 };
    let vote = |strength, bullish, bearish| {
        normalize(&IndicatorReading::gated(strength, bullish, bearish), &rule).unwrap()
    };
    assert_eq!(vote(30.0, 20.0, 10.0), Vote::Buy);
    assert_eq!(vote(30.0, 10.0, 20.0), Vote::Sell);
    assert_eq!(vote(30.0, 15.0, 15.0), Vote::Sell);
    assert_eq!(vote(25.0, 20.0, 10.0), Vote::Neutral);
    assert_eq!(vote(10.0, 40.0, 5.0), Vote::Neutral);
}

#[test]
fn test_mismatched_reading_rejected() {
    let result = normalize(&IndicatorReading::banded(50.0), &VoteRule::Directional);
    assert_eq!(
        result,
        Err(IndicatorError::ReadingMismatch {
            rule: "directional",
            reading: "banded",
        })
    );
}
