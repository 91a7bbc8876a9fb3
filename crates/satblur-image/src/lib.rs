#![deny(missing_docs)]
//! Pixel and image buffer types for the satblur filtering pipeline.

/// image buffer representation.
pub mod image;

/// pixel types and saturating channel arithmetic.
pub mod pixel;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{ImageBuffer, ImageSize};
pub use crate::pixel::{Channel, Pixel, Promote, Rgba, WidePixel};
