use satblur_image::{ImageBuffer, ImageError, WidePixel};

/// Build the summed-area table of a zero-padded buffer.
///
/// Every cell at `row >= border` and `col >= border` holds the inclusive 2-D
/// prefix sum of the padded buffer, through the bottom and right edges. Cells
/// in the top or left border margin are the zero pixel; they are never read
/// by the box-blur evaluator but stay well defined.
///
/// Construction is row-major, top-to-bottom and left-to-right: each cell
/// depends only on its up, left and up-left neighbors, so the pass is
/// inherently sequential.
///
/// # Arguments
///
/// * `padded` - A buffer padded with a zero border of width `border`.
/// * `sat` - The destination table with the same extents as `padded`.
/// * `border` - The border width used when padding.
///
/// # Errors
///
/// Returns an error if the extents of `sat` do not match `padded`.
pub fn integral_image(
    padded: &ImageBuffer<u8>,
    sat: &mut ImageBuffer<u32>,
    border: usize,
) -> Result<(), ImageError> {
    if sat.size() != padded.size() {
        return Err(ImageError::InvalidImageSize(
            sat.width(),
            sat.height(),
            padded.width(),
            padded.height(),
        ));
    }

    let zero = WidePixel::zero();

    for row in 0..padded.height() {
        for col in 0..padded.width() {
            if row < border || col < border {
                sat[(row, col)] = zero;
                continue;
            }

            let up = if row > 0 { sat[(row - 1, col)] } else { zero };
            let left = if col > 0 { sat[(row, col - 1)] } else { zero };
            let up_left = if row > 0 && col > 0 {
                sat[(row - 1, col - 1)]
            } else {
                zero
            };

            // additions first: the intermediate stays non-negative, so the
            // saturating arithmetic never clips a valid prefix sum
            sat[(row, col)] = (padded[(row, col)] + up + left) - up_left;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::padding::{pad_constant, padded_size};
    use satblur_image::{ImageSize, Pixel};

    /// Brute-force sum of the padded buffer over an inclusive rectangle.
    fn rect_sum(padded: &ImageBuffer<u8>, r1: usize, c1: usize, r2: usize, c2: usize) -> [u32; 3] {
        let mut sum = [0u32; 3];
        for row in r1..=r2 {
            for col in c1..=c2 {
                let px = padded[(row, col)];
                sum[0] += px.r as u32;
                sum[1] += px.g as u32;
                sum[2] += px.b as u32;
            }
        }
        sum
    }

    #[test]
    fn prefix_sums_match_brute_force() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 4,
            height: 3,
        };
        // deterministic but non-uniform channel values
        let data = (0..12)
            .map(|i| Pixel::new((i * 7 % 256) as u8, (i * 13 % 256) as u8, (i * 29 % 256) as u8, 255))
            .collect();
        let src = ImageBuffer::new(size, data)?;

        let border = 2;
        let mut padded = ImageBuffer::from_size_val(padded_size(size, border), Pixel::zero());
        pad_constant(&src, &mut padded, border)?;

        let mut sat = ImageBuffer::from_size_val(padded.size(), WidePixel::zero());
        integral_image(&padded, &mut sat, border)?;

        // every rectangle anchored past the top/left margin satisfies the
        // inclusion-exclusion identity against the brute-force sum
        for r1 in border..padded.height() {
            for c1 in border..padded.width() {
                for r2 in r1..padded.height() {
                    for c2 in c1..padded.width() {
                        let p1 = sat[(r2, c2)];
                        let p2 = sat[(r2, c1 - 1)];
                        let p3 = sat[(r1 - 1, c2)];
                        let p4 = sat[(r1 - 1, c1 - 1)];
                        let got = ((p1 + p4) - p2) - p3;
                        let expected = rect_sum(&padded, r1, c1, r2, c2);
                        assert_eq!([got.r, got.g, got.b], expected);
                    }
                }
            }
        }

        Ok(())
    }

    #[test]
    fn margin_cells_are_zero() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 2,
        };
        let src = ImageBuffer::from_size_val(size, Pixel::splat(255));

        let border = 2;
        let mut padded = ImageBuffer::from_size_val(padded_size(size, border), Pixel::zero());
        pad_constant(&src, &mut padded, border)?;

        let mut sat = ImageBuffer::from_size_val(padded.size(), WidePixel::splat(123));
        integral_image(&padded, &mut sat, border)?;

        for row in 0..sat.height() {
            for col in 0..sat.width() {
                if row < border || col < border {
                    assert_eq!(sat[(row, col)], WidePixel::zero());
                }
            }
        }

        Ok(())
    }

    #[test]
    fn bottom_right_cell_is_the_total_sum() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 3,
            height: 3,
        };
        let src = ImageBuffer::from_size_val(size, Pixel::splat(10));

        let border = 1;
        let mut padded = ImageBuffer::from_size_val(padded_size(size, border), Pixel::zero());
        pad_constant(&src, &mut padded, border)?;

        let mut sat = ImageBuffer::from_size_val(padded.size(), WidePixel::zero());
        integral_image(&padded, &mut sat, border)?;

        let corner = sat[(sat.height() - 1, sat.width() - 1)];
        assert_eq!((corner.r, corner.g, corner.b), (90, 90, 90));

        Ok(())
    }

    #[test]
    fn size_mismatch_is_an_error() {
        let padded = ImageBuffer::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            Pixel::zero(),
        );
        let mut sat = ImageBuffer::from_size_val(
            ImageSize {
                width: 3,
                height: 4,
            },
            WidePixel::zero(),
        );
        assert!(integral_image(&padded, &mut sat, 1).is_err());
    }
}
