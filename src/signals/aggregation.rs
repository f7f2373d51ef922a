//! Vote tally and verdict bands

use serde::{Deserialize, Serialize};

use crate::models::{IndicatorVote, VerdictLabel, Vote, VoteTally};

/// Indicator count the reference bands are calibrated against
pub const REFERENCE_INDICATOR_COUNT: usize = 20;
const REFERENCE_STRONG: i32 = 6;
const REFERENCE_MODERATE: i32 = 2;

/// Net-score thresholds mapping a score to a verdict.
///
/// | score                      | verdict     |
/// |----------------------------|-------------|
/// | score ≥ strong             | STRONG_BUY  |
/// | moderate ≤ score < strong  | BUY         |
/// | -moderate < score < moderate | NEUTRAL   |
/// | -strong < score ≤ -moderate | SELL       |
/// | score ≤ -strong            | STRONG_SELL |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictBands {
    pub strong: i32,
    pub moderate: i32,
}

impl Default for VerdictBands {
    fn default() -> Self {
        Self {
            strong: REFERENCE_STRONG,
            moderate: REFERENCE_MODERATE,
        }
    }
}

impl VerdictBands {
    /// Re-derive the reference bands proportionally for `count` indicators
    pub fn for_indicator_count(count: usize) -> Self {
        let scale = |reference: i32| -> i32 {
            let scaled = (reference as f64 * count as f64 / REFERENCE_INDICATOR_COUNT as f64).round();
            (scaled as i32).max(1)
        };
        let moderate = scale(REFERENCE_MODERATE);
        let strong = scale(REFERENCE_STRONG).max(moderate);
        Self { strong, moderate }
    }

    pub fn classify(&self, score: i32) -> VerdictLabel {
        if score >= self.strong {
            VerdictLabel::StrongBuy
        } else if score >= self.moderate {
            VerdictLabel::Buy
        } else if score > -self.moderate {
            VerdictLabel::Neutral
        } else if score > -self.strong {
            VerdictLabel::Sell
        } else {
            VerdictLabel::StrongSell
        }
    }
}

/// Tallies votes and maps the net score to a verdict
pub struct Aggregator;

impl Aggregator {
    pub fn tally(votes: &[IndicatorVote]) -> VoteTally {
        votes.iter().map(|vote| vote.signal).collect()
    }

    pub fn tally_votes(votes: &[Vote]) -> VoteTally {
        votes.iter().copied().collect()
    }

    pub fn verdict(tally: &VoteTally, bands: &VerdictBands) -> (VerdictLabel, i32) {
        let score = tally.score();
        (bands.classify(score), score)
    }
}
