#![deny(missing_docs)]
//! Image decode and encode boundary for the satblur pipeline.

/// Error types for the io module.
pub mod error;

/// High-level read/decode and write/encode functions.
pub mod functional;

pub use crate::error::IoError;
