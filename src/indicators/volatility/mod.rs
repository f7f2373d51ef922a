//! Volatility indicators: Bollinger Bands, ATR, Donchian, Keltner

pub mod bollinger;
pub mod atr;
pub mod donchian;
pub mod keltner;

pub use bollinger::*;
pub use atr::*;
pub use donchian::*;
pub use keltner::*;
