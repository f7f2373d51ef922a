//! Vote normalization: maps an indicator reading to BUY / SELL / NEUTRAL
//!
//! Every two-sided comparison is strictly-greater-than for BUY. A probe equal
//! to its reference is a SELL.

use serde::{Deserialize, Serialize};

use crate::config::Band;
use crate::indicators::error::IndicatorError;
use crate::models::{IndicatorReading, Vote};

/// Decision rule attached to an indicator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum VoteRule {
    /// probe > reference → BUY, otherwise SELL
    Directional,
    /// value < lower → BUY (oversold), value > upper → SELL (overbought)
    Banded { lower: f64, upper: f64 },
    /// price < lower band → BUY, price > upper band → SELL
    MeanReversion,
    /// price > upper band → BUY, price < lower band → SELL
    Breakout,
    /// strength > threshold → bullish > bearish decides, otherwise NEUTRAL
    StrengthGated { threshold: f64 },
}

impl VoteRule {
    pub fn banded(band: Band) -> Self {
        VoteRule::Banded {
            lower: band.lower,
            upper: band.upper,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VoteRule::Directional => "directional",
            VoteRule::Banded { .. } => "banded",
            VoteRule::MeanReversion => "mean_reversion",
            VoteRule::Breakout => "breakout",
            VoteRule::StrengthGated { .. } => "strength_gated",
        }
    }
}

fn reading_kind(reading: &IndicatorReading) -> &'static str {
    match reading {
        IndicatorReading::Directional { .. } => "directional",
        IndicatorReading::Banded { .. } => "banded",
        IndicatorReading::Channel { .. } => "channel",
        IndicatorReading::Gated { .. } => "gated",
    }
}

/// BUY when `probe` is strictly above `reference`
pub fn directional_vote(probe: f64, reference: f64) -> Vote {
    if probe > reference {
        Vote::Buy
    } else {
        Vote::Sell
    }
}

/// Apply `rule` to `reading`
pub fn normalize(reading: &IndicatorReading, rule: &VoteRule) -> Result<Vote, IndicatorError> {
    let vote = match (rule, *reading) {
        (VoteRule::Directional, IndicatorReading::Directional { probe, reference }) => {
            directional_vote(probe, reference)
        }
        (VoteRule::Banded { lower, upper }, IndicatorReading::Banded { value }) => {
            if value < *lower {
                Vote::Buy
            } else if value > *upper {
                Vote::Sell
            } else {
                Vote::Neutral
            }
        }
        (
            VoteRule::MeanReversion,
            IndicatorReading::Channel {
                price,
                lower,
                upper,
            },
        ) => {
            if price < lower {
                Vote::Buy
            } else if price > upper {
                Vote::Sell
            } else {
                Vote::Neutral
            }
        }
        (
            VoteRule::Breakout,
            IndicatorReading::Channel {
                price,
                lower,
                upper,
            },
        ) => {
            if price > upper {
                Vote::Buy
            } else if price < lower {
                Vote::Sell
            } else {
                Vote::Neutral
            }
        }
        (
            VoteRule::StrengthGated { threshold },
            IndicatorReading::Gated {
                strength,
                bullish,
                bearish,
            },
        ) => {
            if strength > *threshold {
                directional_vote(bullish, bearish)
            } else {
                Vote::Neutral
            }
        }
        (rule, reading) => {
            return Err(IndicatorError::ReadingMismatch {
                rule: rule.as_str(),
                reading: reading_kind(&reading),
            })
        }
    };

    Ok(vote)
}
