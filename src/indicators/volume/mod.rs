//! Volume indicators: OBV, MFI, VWAP, accumulation check

pub mod obv;
pub mod mfi;
pub mod vwap;
pub mod accumulation;

pub use obv::*;
pub use mfi::*;
pub use vwap::*;
pub use accumulation::*;
