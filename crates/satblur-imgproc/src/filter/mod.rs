//! Filter operations
//!
//! This module provides the direct convolution evaluator and the
//! summed-area-table box-blur evaluator.

/// Filter kernels
pub mod kernels;

/// Filter evaluators
mod ops;
pub use ops::*;
