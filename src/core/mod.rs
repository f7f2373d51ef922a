//! Service surface around the aggregator

pub mod http;

pub use http::*;
