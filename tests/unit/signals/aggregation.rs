//! Unit tests for the tally and verdict bands

use signal_consensus::models::{VerdictLabel, Vote};
use signal_consensus::signals::{Aggregator, VerdictBands};

#[test]
fn test_reference_bands() {
    let bands = VerdictBands::default();
    assert_eq!(bands, VerdictBands { strong: 6, moderate: 2 });
    assert_eq!(VerdictBands::for_indicator_count(20), bands);
}

#[test]
fn test_verdict_table() {
    let bands = VerdictBands::default();
    let cases = [
        (20, VerdictLabel::StrongBuy),
        (6, VerdictLabel::StrongBuy),
        (5, VerdictLabel::Buy),
        (2, VerdictLabel::Buy),
        (1, VerdictLabel::Neutral),
        (0, VerdictLabel::Neutral),
        (-1, VerdictLabel::Neutral),
        (-2, VerdictLabel::Sell),
        (-5, VerdictLabel::Sell),
        (-6, VerdictLabel::StrongSell),
        (-7, VerdictLabel::StrongSell),
    ];
    for (score, expected) in cases {
        assert_eq!(bands.classify(score), expected, "score {}", score);
    }
}

#[test]
fn test_bands_scale_with_indicator_count() {
    assert_eq!(
        VerdictBands::for_indicator_count(10),
        VerdictBands { strong: 3, moderate: 1 }
    );
    assert_eq!(
        VerdictBands::for_indicator_count(40),
        VerdictBands { strong: 12, moderate: 4 }
    );
    let tiny = VerdictBands::for_indicator_count(1);
    assert!(tiny.moderate >= 1);
    assert!(tiny.strong >= tiny.moderate);
}

#[test]
fn test_tally_and_verdict() {
    let mut votes = vec![Vote::Buy; 7];
    votes.extend(vec![Vote::Sell; 2]);
    votes.extend(vec![Vote::Neutral; 11]);

    let tally = Aggregator::tally_votes(&votes);
    assert_eq!(tally.total(), 20);

    let (verdict, score) = Aggregator::verdict(&tally, &VerdictBands::default());
    assert_eq!(score, 5);
    assert_eq!(verdict, VerdictLabel::Buy);
}
