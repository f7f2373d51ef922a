//! Momentum indicators: RSI, Stochastic, CCI, Williams %R, ROC

pub mod rsi;
pub mod stochastic;
pub mod cci;
pub mod williams_r;
pub mod roc;

pub use rsi::*;
pub use stochastic::*;
pub use cci::*;
pub use williams_r::*;
pub use roc::*;
