//! Per-category vote breakdown

use crate::indicators::registry::IndicatorCategory;
use crate::models::{CategoryBreakdown, IndicatorVote, VoteTally};

/// Tally votes per category, in category order, skipping empty categories
pub fn breakdown_by_category(votes: &[IndicatorVote]) -> Vec<CategoryBreakdown> {
    IndicatorCategory::all()
        .into_iter()
        .filter_map(|category| {
            let tally: VoteTally = votes
                .iter()
                .filter(|vote| vote.category == Some(category))
                .map(|vote| vote.signal)
                .collect();
            if tally.total() == 0 {
                return None;
            }
            Some(CategoryBreakdown {
                category,
                buy: tally.buy,
                sell: tally.sell,
                neutral: tally.neutral,
                score: tally.score(),
            })
        })
        .collect()
}
