use std::ops::{Index, IndexMut};

use crate::error::ImageError;
use crate::pixel::{Channel, Rgba};

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use satblur_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// A rectangular, row-major buffer of RGBA pixels with explicit extents.
///
/// The buffer exclusively owns its backing storage; dropping it releases the
/// pixels. All addressing goes through `(row, col)` coordinates so flat
/// offsets never leak into evaluator code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageBuffer<T: Channel> {
    size: ImageSize,
    data: Vec<Rgba<T>>,
}

impl<T: Channel> ImageBuffer<T> {
    /// Create a new buffer from pixel data.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the extents, an error
    /// is returned.
    pub fn new(size: ImageSize, data: Vec<Rgba<T>>) -> Result<Self, ImageError> {
        if data.len() != size.width * size.height {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height,
            ));
        }
        Ok(Self { size, data })
    }

    /// Create a new buffer with the given extents, filled with `val`.
    pub fn from_size_val(size: ImageSize, val: Rgba<T>) -> Self {
        Self {
            size,
            data: vec![val; size.width * size.height],
        }
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Get the pixel at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&Rgba<T>> {
        if row >= self.size.height || col >= self.size.width {
            return None;
        }
        self.data.get(row * self.size.width + col)
    }

    /// View the pixels as a flat row-major slice.
    pub fn as_slice(&self) -> &[Rgba<T>] {
        &self.data
    }

    /// View the pixels as a mutable flat row-major slice.
    pub fn as_slice_mut(&mut self) -> &mut [Rgba<T>] {
        &mut self.data
    }
}

impl ImageBuffer<u8> {
    /// Build a buffer from a flat RGBA8 byte slice, 4 bytes per pixel in
    /// row-major order, as produced by the decode boundary.
    ///
    /// # Errors
    ///
    /// If the byte length does not match the extents, an error is returned.
    pub fn from_rgba8(size: ImageSize, data: &[u8]) -> Result<Self, ImageError> {
        if data.len() != size.width * size.height * 4 {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height * 4,
            ));
        }
        let pixels = data
            .chunks_exact(4)
            .map(|c| Rgba::new(c[0], c[1], c[2], c[3]))
            .collect();
        Ok(Self { size, data: pixels })
    }

    /// Flatten into RGBA8 bytes for the encode boundary.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() * 4);
        for px in &self.data {
            out.extend_from_slice(&[px.r, px.g, px.b, px.a]);
        }
        out
    }
}

impl<T: Channel> Index<(usize, usize)> for ImageBuffer<T> {
    type Output = Rgba<T>;

    /// Access the pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.size.height && col < self.size.width,
            "pixel ({row}, {col}) out of bounds for {}",
            self.size
        );
        &self.data[row * self.size.width + col]
    }
}

impl<T: Channel> IndexMut<(usize, usize)> for ImageBuffer<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.size.height && col < self.size.width,
            "pixel ({row}, {col}) out of bounds for {}",
            self.size
        );
        &mut self.data[row * self.size.width + col]
    }
}
