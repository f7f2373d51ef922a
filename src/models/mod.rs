//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod series;
pub mod signal;

pub use indicators::{Candle, IndicatorReading};
pub use series::{PriceSeries, RawSeries, SeriesError};
pub use signal::{
    AggregationResult, CategoryBreakdown, IndicatorVote, VerdictLabel, Vote, VoteTally,
};
