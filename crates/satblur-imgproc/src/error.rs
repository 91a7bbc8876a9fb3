use satblur_image::ImageError;

/// An error type for the filtering operations.
#[derive(thiserror::Error, Debug)]
pub enum FilterError {
    /// Error when the kernel size is even or zero.
    #[error("Invalid kernel size ({0}), must be an odd positive integer")]
    InvalidKernelSize(usize),

    /// Error when the kernel weights do not match the kernel extents.
    #[error("Kernel has {0} weights, expected {1}")]
    InvalidKernelLength(usize, usize),

    /// Error when the kernel divisor is not a positive integer.
    #[error("Invalid kernel divisor ({0}), must be positive")]
    InvalidKernelDivisor(i64),

    /// Error bubbled up from the image buffers.
    #[error(transparent)]
    Image(#[from] ImageError),
}
