use serde::{Deserialize, Serialize};

use crate::indicators::registry::IndicatorCategory;

/// Discrete vote cast by one indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Vote {
    Buy,
    Sell,
    Neutral,
}

impl Vote {
    pub fn as_str(&self) -> &'static str {
        match self {
            Vote::Buy => "BUY",
            Vote::Sell => "SELL",
            Vote::Neutral => "NEUTRAL",
        }
    }
}

impl std::fmt::Display for Vote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vote counts for one aggregation call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    pub buy: u32,
    pub sell: u32,
    pub neutral: u32,
}

impl VoteTally {
    pub fn record(&mut self, vote: Vote) {
        match vote {
            Vote::Buy => self.buy += 1,
            Vote::Sell => self.sell += 1,
            Vote::Neutral => self.neutral += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.buy + self.sell + self.neutral
    }

    /// Net score: buy votes minus sell votes
    pub fn score(&self) -> i32 {
        self.buy as i32 - self.sell as i32
    }
}

impl FromIterator<Vote> for VoteTally {
    fn from_iter<I: IntoIterator<Item = Vote>>(iter: I) -> Self {
        let mut tally = VoteTally::default();
        for vote in iter {
            tally.record(vote);
        }
        tally
    }
}

/// Final verdict label, plus the LOADING sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerdictLabel {
    StrongBuy,
    Buy,
    Neutral,
    Sell,
    StrongSell,
    Loading,
}

impl VerdictLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictLabel::StrongBuy => "STRONG_BUY",
            VerdictLabel::Buy => "BUY",
            VerdictLabel::Neutral => "NEUTRAL",
            VerdictLabel::Sell => "SELL",
            VerdictLabel::StrongSell => "STRONG_SELL",
            VerdictLabel::Loading => "LOADING",
        }
    }

    /// Display color; carries no semantic weight
    pub fn color(&self) -> &'static str {
        match self {
            VerdictLabel::StrongBuy => "darkgreen",
            VerdictLabel::Buy => "green",
            VerdictLabel::Neutral => "yellow",
            VerdictLabel::Sell => "red",
            VerdictLabel::StrongSell => "darkred",
            VerdictLabel::Loading => "gray",
        }
    }

    /// Display-only decoration
    pub fn emoji(&self) -> &'static str {
        match self {
            VerdictLabel::StrongBuy => "🚀",
            VerdictLabel::Buy => "📈",
            VerdictLabel::Neutral => "⚖️",
            VerdictLabel::Sell => "📉",
            VerdictLabel::StrongSell => "🔻",
            VerdictLabel::Loading => "⏳",
        }
    }
}

impl std::fmt::Display for VerdictLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the ordered detail list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorVote {
    pub name: String,
    #[serde(skip)]
    pub category: Option<IndicatorCategory>,
    pub signal: Vote,
}

/// Vote counts for one indicator category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: IndicatorCategory,
    pub buy: u32,
    pub sell: u32,
    pub neutral: u32,
    pub score: i32,
}

/// Full response of one aggregation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    pub verdict: VerdictLabel,
    pub score: i32,
    /// |score| over the number of indicators, in [0, 1]
    pub confidence: f64,
    pub color: String,
    pub summary: VoteTally,
    pub details: Vec<IndicatorVote>,
    #[serde(default)]
    pub categories: Vec<CategoryBreakdown>,
}

impl AggregationResult {
    /// Sentinel returned when there is not enough history or a computation failed
    pub fn loading() -> Self {
        Self {
            verdict: VerdictLabel::Loading,
            score: 0,
            confidence: 0.0,
            color: VerdictLabel::Loading.color().to_string(),
            summary: VoteTally::default(),
            details: Vec::new(),
            categories: Vec::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.verdict == VerdictLabel::Loading
    }

    /// Vote of a named indicator, if present
    pub fn signal_for(&self, name: &str) -> Option<Vote> {
        self.details
            .iter()
            .find(|detail| detail.name == name)
            .map(|detail| detail.signal)
    }

    /// Human-readable headline, e.g. `📈 BUY (score 3)`
    pub fn headline(&self) -> String {
        format!(
            "{} {} (score {})",
            self.verdict.emoji(),
            self.verdict,
            self.score
        )
    }
}
