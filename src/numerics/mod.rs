//! Numeric building blocks: count ranges and Gaussian functions

pub mod gaussian;
pub mod range;

pub use range::Range;
