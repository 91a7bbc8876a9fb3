#![deny(missing_docs)]
//! Spatial kernel filtering and summed-area-table operations.

/// error types for the imgproc module.
pub mod error;

/// image filtering module.
pub mod filter;

/// summed-area-table construction module.
pub mod integral;

/// zero-border padding module.
pub mod padding;

pub use crate::error::FilterError;
