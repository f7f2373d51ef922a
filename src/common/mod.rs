//! Shared helpers used across indicator implementations

pub mod math;
