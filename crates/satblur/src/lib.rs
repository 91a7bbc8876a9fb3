#![deny(missing_docs)]
//! satblur top-level crate: re-exports the member crates and hosts the
//! image processor that ties decode, padding, SAT construction and the
//! filter evaluators together.

#[doc(inline)]
pub use satblur_image as image;

#[doc(inline)]
pub use satblur_imgproc as imgproc;

#[doc(inline)]
pub use satblur_io as io;

/// image processor orchestration module.
pub mod processor;

pub use crate::processor::{FilterKind, ImageProcessor, ProcessorError};
