use satblur_image::{Channel, ImageBuffer, ImageError, ImageSize, Rgba};

/// The extents of a buffer padded with a uniform border of width `border`.
pub fn padded_size(size: ImageSize, border: usize) -> ImageSize {
    ImageSize {
        width: size.width + 2 * border,
        height: size.height + 2 * border,
    }
}

/// Surround `src` with a zero-pixel border of width `border`.
///
/// The interior of `dst` is a copy of `src`; everything else is the zero
/// pixel `{0, 0, 0, 255}`. Every destination cell is written exactly once,
/// and `border == 0` degenerates to a plain copy.
///
/// # Arguments
///
/// * `src` - The source buffer.
/// * `dst` - The destination buffer with extents `(h + 2B) x (w + 2B)`.
/// * `border` - The border width B in pixels.
///
/// # Errors
///
/// Returns an error if the extents of `dst` do not match the padded extents
/// of `src`.
pub fn pad_constant<T: Channel>(
    src: &ImageBuffer<T>,
    dst: &mut ImageBuffer<T>,
    border: usize,
) -> Result<(), ImageError> {
    let expected = padded_size(src.size(), border);
    if dst.size() != expected {
        return Err(ImageError::InvalidImageSize(
            dst.width(),
            dst.height(),
            expected.width,
            expected.height,
        ));
    }

    let zero = Rgba::zero();
    let (padded_h, padded_w) = (dst.height(), dst.width());

    // top and bottom border rows
    for row in 0..border {
        for col in 0..padded_w {
            dst[(row, col)] = zero;
            dst[(padded_h - 1 - row, col)] = zero;
        }
    }

    // interior rows: left border, source row copy, right border
    for row in border..padded_h - border {
        for col in 0..border {
            dst[(row, col)] = zero;
            dst[(row, padded_w - 1 - col)] = zero;
        }
        for col in border..padded_w - border {
            dst[(row, col)] = src[(row - border, col - border)];
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use satblur_image::Pixel;

    #[test]
    fn pad_2x2_with_border_1() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 2,
        };
        let src = ImageBuffer::new(
            size,
            vec![
                Pixel::splat(1),
                Pixel::splat(2),
                Pixel::splat(3),
                Pixel::splat(4),
            ],
        )?;
        let mut dst = ImageBuffer::from_size_val(padded_size(size, 1), Pixel::splat(99));

        pad_constant(&src, &mut dst, 1)?;

        assert_eq!(dst.width(), 4);
        assert_eq!(dst.height(), 4);

        // corners and edges are the zero pixel
        assert_eq!(dst[(0, 0)], Pixel::zero());
        assert_eq!(dst[(0, 2)], Pixel::zero());
        assert_eq!(dst[(3, 3)], Pixel::zero());
        assert_eq!(dst[(1, 0)], Pixel::zero());
        assert_eq!(dst[(2, 3)], Pixel::zero());

        // interior is the source
        assert_eq!(dst[(1, 1)], Pixel::splat(1));
        assert_eq!(dst[(1, 2)], Pixel::splat(2));
        assert_eq!(dst[(2, 1)], Pixel::splat(3));
        assert_eq!(dst[(2, 2)], Pixel::splat(4));

        Ok(())
    }

    #[test]
    fn border_zero_is_a_copy() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 3,
            height: 2,
        };
        let src = ImageBuffer::new(size, (0..6i64).map(Pixel::splat).collect())?;
        let mut dst = ImageBuffer::from_size_val(size, Pixel::splat(42));

        pad_constant(&src, &mut dst, 0)?;
        assert_eq!(dst, src);

        Ok(())
    }

    #[test]
    fn every_cell_is_written() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 3,
            height: 3,
        };
        let src = ImageBuffer::from_size_val(size, Pixel::splat(10));
        // poison the destination so any untouched cell shows through
        let mut dst = ImageBuffer::from_size_val(padded_size(size, 2), Pixel::splat(77));

        pad_constant(&src, &mut dst, 2)?;

        for row in 0..dst.height() {
            for col in 0..dst.width() {
                let px = dst[(row, col)];
                assert!(px == Pixel::zero() || px == Pixel::splat(10));
            }
        }

        Ok(())
    }

    #[test]
    fn size_mismatch_is_an_error() {
        let size = ImageSize {
            width: 2,
            height: 2,
        };
        let src = ImageBuffer::from_size_val(size, Pixel::zero());
        let mut dst = ImageBuffer::from_size_val(size, Pixel::zero());

        let res = pad_constant(&src, &mut dst, 1);
        assert!(res.is_err());
    }
}
