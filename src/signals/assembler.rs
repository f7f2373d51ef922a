//! Packages ordered votes into the response object

use crate::models::{AggregationResult, IndicatorVote};
use crate::signals::aggregation::{Aggregator, VerdictBands};
use crate::signals::categories::breakdown_by_category;
use crate::signals::scoring::calculate_confidence;

/// Build the result from the full, pipeline-ordered vote list. Nothing is
/// filtered or truncated.
pub fn assemble(details: Vec<IndicatorVote>, bands: &VerdictBands) -> AggregationResult {
    let summary = Aggregator::tally(&details);
    let (verdict, score) = Aggregator::verdict(&summary, bands);
    let categories = breakdown_by_category(&details);

    AggregationResult {
        verdict,
        score,
        confidence: calculate_confidence(score, details.len()),
        color: verdict.color().to_string(),
        summary,
        details,
        categories,
    }
}
