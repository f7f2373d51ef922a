//! Multi-indicator technical-analysis signal aggregator.
//!
//! A price/volume series runs through a fixed, category-ordered battery of
//! indicators. Each indicator casts a BUY / SELL / NEUTRAL vote and the votes
//! are tallied into a single verdict.

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod signals;

pub use models::{AggregationResult, PriceSeries, SeriesError, Vote, VerdictLabel};
pub use signals::engine::SignalAggregator;
