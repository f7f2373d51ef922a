pub mod error;
pub mod validation;
pub mod registry;

pub mod momentum;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use error::IndicatorError;
pub use registry::*;
