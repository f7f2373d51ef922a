//! Trend indicators: SMA, EMA, MACD, ADX, Parabolic SAR, Ichimoku, ATR trend-follow

pub mod sma;
pub mod ema;
pub mod macd;
pub mod adx;
pub mod parabolic_sar;
pub mod ichimoku;
pub mod trend_follow;

pub use sma::*;
pub use ema::*;
pub use macd::*;
pub use adx::*;
pub use parabolic_sar::*;
pub use ichimoku::*;
pub use trend_follow::*;
