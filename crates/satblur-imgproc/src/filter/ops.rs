use satblur_image::{Channel, ImageBuffer, ImageError, Pixel, Rgba};

use crate::error::FilterError;
use crate::padding::padded_size;

use super::kernels::Kernel2d;

/// Apply a kernel to a zero-padded buffer by direct convolution.
///
/// For every destination pixel the KxK neighborhood of the corresponding
/// padded pixel is multiplied by the kernel weights into a signed wide
/// accumulator, normalized by the kernel divisor, clamped to `[0, 255]` and
/// written with alpha fixed at 255. This is O(K^2) per output pixel.
///
/// # Arguments
///
/// * `padded` - The source buffer padded with a zero border of width
///   `kernel.radius()`.
/// * `dst` - The destination buffer in source extents.
/// * `kernel` - The kernel to apply.
///
/// # Errors
///
/// Returns an error if the extents of `padded` do not match the extents of
/// `dst` padded by the kernel radius.
pub fn convolve(
    padded: &ImageBuffer<u8>,
    dst: &mut ImageBuffer<u8>,
    kernel: &Kernel2d,
) -> Result<(), FilterError> {
    let expected = padded_size(dst.size(), kernel.radius());
    if padded.size() != expected {
        return Err(FilterError::Image(ImageError::InvalidImageSize(
            padded.width(),
            padded.height(),
            expected.width,
            expected.height,
        )));
    }

    let divisor = kernel.divisor();

    for row in 0..dst.height() {
        for col in 0..dst.width() {
            let mut sum_r = 0i64;
            let mut sum_g = 0i64;
            let mut sum_b = 0i64;

            for krow in 0..kernel.size() {
                for kcol in 0..kernel.size() {
                    let weight = kernel.weight(krow, kcol);
                    let px = padded[(row + krow, col + kcol)];
                    sum_r += px.r.widen() * weight;
                    sum_g += px.g.widen() * weight;
                    sum_b += px.b.widen() * weight;
                }
            }

            if divisor > 1 {
                sum_r /= divisor;
                sum_g /= divisor;
                sum_b /= divisor;
            }

            dst[(row, col)] = Pixel::from_i64(sum_r, sum_g, sum_b, 255);
        }
    }

    Ok(())
}

/// Average an NxN window around every source pixel in O(1) per pixel using
/// four summed-area-table lookups.
///
/// The table must have been built from a padding of width `radius + 1`: the
/// extra row and column of guaranteed zeros just outside the query rectangle
/// is what keeps the four corner indices non-negative.
///
/// The four corners are combined as `(p1 + p4) - p2 - p3`; in that order
/// every intermediate is itself a non-negative rectangle sum, so the
/// saturating wide arithmetic never clips a valid value. The window sum is
/// divided by K*K (truncating) and written with alpha fixed at 255.
///
/// # Arguments
///
/// * `sat` - The summed-area table, padded extents with border
///   `radius + 1`.
/// * `dst` - The destination buffer in source extents.
/// * `kernel_size` - The odd window side length K.
///
/// # Errors
///
/// Returns an error if `kernel_size` is even or zero, or if the extents of
/// `sat` do not match the extents of `dst` padded by `radius + 1`.
pub fn box_blur_sat(
    sat: &ImageBuffer<u32>,
    dst: &mut ImageBuffer<u8>,
    kernel_size: usize,
) -> Result<(), FilterError> {
    if kernel_size == 0 || kernel_size % 2 == 0 {
        return Err(FilterError::InvalidKernelSize(kernel_size));
    }

    let radius = (kernel_size - 1) / 2;
    let border = radius + 1;

    let expected = padded_size(dst.size(), border);
    if sat.size() != expected {
        return Err(FilterError::Image(ImageError::InvalidImageSize(
            sat.width(),
            sat.height(),
            expected.width,
            expected.height,
        )));
    }

    let area = (kernel_size * kernel_size) as i64;

    for row in 0..dst.height() {
        for col in 0..dst.width() {
            let prow = row + border;
            let pcol = col + border;

            let p1 = sat[(prow + radius, pcol + radius)];
            let p2 = sat[(prow + radius, pcol - radius - 1)];
            let p3 = sat[(prow - radius - 1, pcol + radius)];
            let p4 = sat[(prow - radius - 1, pcol - radius - 1)];

            let mean = (((p1 + p4) - p2) - p3) / area;

            dst[(row, col)] = Rgba {
                a: u8::MAX,
                ..mean.cast()
            };
        }
    }

    Ok(())
}
