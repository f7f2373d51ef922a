use thiserror::Error;

/// Failure of a single indicator computation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error("insufficient data: need {required} bars, got {got}")]
    InsufficientData { required: usize, got: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("{indicator}: division by zero")]
    ZeroDivisor { indicator: String },

    #[error("{indicator} produced a non-finite value")]
    NonFinite { indicator: String },

    #[error("{rule} rule cannot vote on a {reading} reading")]
    ReadingMismatch {
        rule: &'static str,
        reading: &'static str,
    },
}
