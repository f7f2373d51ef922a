//! Confidence calculation

/// Share of the indicator set agreeing on the net direction, in [0, 1]
pub fn calculate_confidence(score: i32, indicator_count: usize) -> f64 {
    if indicator_count == 0 {
        return 0.0;
    }
    (score.unsigned_abs() as f64 / indicator_count as f64).min(1.0)
}
