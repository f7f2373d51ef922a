//! Vote normalization, aggregation and result assembly.

pub mod aggregation;
pub mod assembler;
pub mod categories;
pub mod engine;
pub mod normalizer;
pub mod scoring;

pub use aggregation::*;
pub use assembler::*;
pub use categories::*;
pub use engine::*;
pub use normalizer::*;
pub use scoring::*;
