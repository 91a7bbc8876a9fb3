use crate::error::FilterError;

/// A square convolution kernel of signed integer weights.
///
/// `divisor` is the normalization applied to the weighted sum before
/// clamping: 1 for the raw weighted filters (sharpen, edge detection,
/// emboss), the weight total for the normalized ones (gaussian, box).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Kernel2d {
    size: usize,
    weights: Vec<i64>,
    divisor: i64,
}

impl Kernel2d {
    /// Create a kernel from row-major weights.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is even or zero, if the weight count does
    /// not match `size * size`, or if the divisor is not positive.
    pub fn new(size: usize, weights: Vec<i64>, divisor: i64) -> Result<Self, FilterError> {
        if size == 0 || size % 2 == 0 {
            return Err(FilterError::InvalidKernelSize(size));
        }
        if weights.len() != size * size {
            return Err(FilterError::InvalidKernelLength(weights.len(), size * size));
        }
        if divisor <= 0 {
            return Err(FilterError::InvalidKernelDivisor(divisor));
        }
        Ok(Self {
            size,
            weights,
            divisor,
        })
    }

    /// The kernel side length K.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The kernel radius `(K - 1) / 2`.
    pub fn radius(&self) -> usize {
        (self.size - 1) / 2
    }

    /// The weight at kernel cell `(row, col)`.
    pub fn weight(&self, row: usize, col: usize) -> i64 {
        self.weights[row * self.size + col]
    }

    /// The normalization divisor.
    pub fn divisor(&self) -> i64 {
        self.divisor
    }
}

/// The 3x3 sharpen kernel (raw weighted sum).
pub fn sharpen_kernel_3x3() -> Kernel2d {
    #[rustfmt::skip]
    let weights = vec![
         0, -1,  0,
        -1,  5, -1,
         0, -1,  0,
    ];
    Kernel2d {
        size: 3,
        weights,
        divisor: 1,
    }
}

/// The 3x3 edge detection kernel (raw weighted sum).
pub fn edge_detect_kernel_3x3() -> Kernel2d {
    #[rustfmt::skip]
    let weights = vec![
        -1, -1, -1,
        -1,  8, -1,
        -1, -1, -1,
    ];
    Kernel2d {
        size: 3,
        weights,
        divisor: 1,
    }
}

/// The 3x3 gaussian kernel, normalized by its weight total of 16.
pub fn gaussian_kernel_3x3() -> Kernel2d {
    #[rustfmt::skip]
    let weights = vec![
        1, 2, 1,
        2, 4, 2,
        1, 2, 1,
    ];
    Kernel2d {
        size: 3,
        weights,
        divisor: 16,
    }
}

/// The 3x3 emboss kernel (raw weighted sum).
pub fn emboss_kernel_3x3() -> Kernel2d {
    #[rustfmt::skip]
    let weights = vec![
        -2, -1,  0,
        -1,  1,  1,
         0,  1,  2,
    ];
    Kernel2d {
        size: 3,
        weights,
        divisor: 1,
    }
}

/// The unweighted NxN box kernel, normalized by its area.
///
/// # Errors
///
/// Returns an error if `kernel_size` is even or zero.
pub fn box_kernel(kernel_size: usize) -> Result<Kernel2d, FilterError> {
    if kernel_size == 0 || kernel_size % 2 == 0 {
        return Err(FilterError::InvalidKernelSize(kernel_size));
    }
    let area = kernel_size * kernel_size;
    Ok(Kernel2d {
        size: kernel_size,
        weights: vec![1; area],
        divisor: area as i64,
    })
}
