use std::str::FromStr;

use satblur_image::{ImageBuffer, ImageError, Pixel, WidePixel};
use satblur_imgproc::filter::{self, kernels, kernels::Kernel2d};
use satblur_imgproc::integral::integral_image;
use satblur_imgproc::padding::{pad_constant, padded_size};
use satblur_imgproc::FilterError;
use satblur_io::IoError;

/// The filters the processor can apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
    /// Box blur by direct convolution, O(K^2) per pixel.
    BoxNaive,
    /// Box blur through the summed-area table, O(1) per pixel.
    BoxSat,
    /// 3x3 sharpen.
    Sharpen,
    /// 3x3 edge detection.
    EdgeDetect,
    /// 3x3 gaussian blur.
    Gaussian,
    /// 3x3 emboss.
    Emboss,
}

impl FromStr for FilterKind {
    type Err = ProcessorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "box-naive" => Ok(FilterKind::BoxNaive),
            "box-sat" => Ok(FilterKind::BoxSat),
            "sharpen" => Ok(FilterKind::Sharpen),
            "edge-detect" => Ok(FilterKind::EdgeDetect),
            "gaussian" => Ok(FilterKind::Gaussian),
            "emboss" => Ok(FilterKind::Emboss),
            _ => Err(ProcessorError::UnknownFilter(s.to_string())),
        }
    }
}

/// An error type for the image processor.
#[derive(thiserror::Error, Debug)]
pub enum ProcessorError {
    /// Error when a filter is requested before an image is loaded.
    #[error("No image loaded")]
    NotLoaded,

    /// Error when the kernel size is even or zero.
    #[error("Invalid kernel size ({0}), must be an odd positive integer")]
    InvalidKernelSize(usize),

    /// Error when a filter name cannot be parsed.
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    /// Error from the decode boundary.
    #[error(transparent)]
    Decode(#[from] IoError),

    /// Error from the filter evaluators.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// Error from the image buffers.
    #[error(transparent)]
    Image(#[from] ImageError),
}

/// Owns the working image and orchestrates the filtering pipeline.
///
/// The processor holds exactly one buffer at a time. Loading replaces it,
/// filtering builds the result in transient padded (and, for the SAT path,
/// prefix-sum) buffers and swaps it in only once the pass has completed, so
/// a failed operation never leaves a partially mutated image behind.
#[derive(Debug, Default)]
pub struct ImageProcessor {
    image: Option<ImageBuffer<u8>>,
}

impl ImageProcessor {
    /// Create a processor with no image loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `data` and take ownership of the resulting buffer, replacing
    /// any previously loaded image.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a decodable image; the
    /// previously loaded image, if any, is left untouched.
    pub fn load_image(&mut self, data: &[u8]) -> Result<(), ProcessorError> {
        let decoded = satblur_io::functional::decode_image_rgba8(data)?;
        log::info!(
            "loaded image {}x{} (RGBA)",
            decoded.width(),
            decoded.height()
        );
        self.image = Some(decoded);
        Ok(())
    }

    /// Apply a filter to the loaded image, replacing the owned buffer with
    /// the result. Filters compose: the output of one application is the
    /// input of the next.
    ///
    /// The two box blurs honor `kernel_size`; the fixed filters (sharpen,
    /// edge detection, gaussian, emboss) use their intrinsic 3x3 kernel.
    ///
    /// # Errors
    ///
    /// Returns an error if no image is loaded or if `kernel_size` is even or
    /// zero, in both cases before any allocation and without mutating the
    /// owned buffer.
    pub fn apply_filter(
        &mut self,
        kernel_size: usize,
        kind: FilterKind,
    ) -> Result<(), ProcessorError> {
        if kernel_size == 0 || kernel_size % 2 == 0 {
            return Err(ProcessorError::InvalidKernelSize(kernel_size));
        }
        let src = self.image.as_ref().ok_or(ProcessorError::NotLoaded)?;

        let result = match kind {
            FilterKind::BoxSat => apply_box_sat(src, kernel_size)?,
            FilterKind::BoxNaive => apply_direct(src, &kernels::box_kernel(kernel_size)?)?,
            FilterKind::Sharpen => apply_direct(src, &kernels::sharpen_kernel_3x3())?,
            FilterKind::EdgeDetect => apply_direct(src, &kernels::edge_detect_kernel_3x3())?,
            FilterKind::Gaussian => apply_direct(src, &kernels::gaussian_kernel_3x3())?,
            FilterKind::Emboss => apply_direct(src, &kernels::emboss_kernel_3x3())?,
        };

        log::debug!("applied {kind:?} with kernel size {kernel_size}");
        self.image = Some(result);
        Ok(())
    }

    /// The current image width in pixels, 0 when no image is loaded.
    pub fn width(&self) -> usize {
        self.image.as_ref().map_or(0, ImageBuffer::width)
    }

    /// The current image height in pixels, 0 when no image is loaded.
    pub fn height(&self) -> usize {
        self.image.as_ref().map_or(0, ImageBuffer::height)
    }

    /// A raw view of the current pixel buffer for the encode boundary,
    /// empty when no image is loaded.
    pub fn pixel_data(&self) -> &[Pixel] {
        self.image.as_ref().map_or(&[], |img| img.as_slice())
    }

    /// Borrow the owned buffer, if any.
    pub fn image(&self) -> Option<&ImageBuffer<u8>> {
        self.image.as_ref()
    }
}

/// Run the SAT box-blur path: pad with `radius + 1`, build the table, and
/// evaluate every pixel in O(1).
fn apply_box_sat(
    src: &ImageBuffer<u8>,
    kernel_size: usize,
) -> Result<ImageBuffer<u8>, ProcessorError> {
    let radius = (kernel_size - 1) / 2;
    let border = radius + 1;

    let mut padded = ImageBuffer::from_size_val(padded_size(src.size(), border), Pixel::zero());
    pad_constant(src, &mut padded, border)?;

    let mut sat = ImageBuffer::from_size_val(padded.size(), WidePixel::zero());
    integral_image(&padded, &mut sat, border)?;

    let mut dst = ImageBuffer::from_size_val(src.size(), Pixel::zero());
    filter::box_blur_sat(&sat, &mut dst, kernel_size)?;
    Ok(dst)
}

/// Run the direct convolution path: pad with the kernel radius and evaluate
/// the kernel at every pixel.
fn apply_direct(src: &ImageBuffer<u8>, kernel: &Kernel2d) -> Result<ImageBuffer<u8>, ProcessorError> {
    let border = kernel.radius();

    let mut padded = ImageBuffer::from_size_val(padded_size(src.size(), border), Pixel::zero());
    pad_constant(src, &mut padded, border)?;

    let mut dst = ImageBuffer::from_size_val(src.size(), Pixel::zero());
    filter::convolve(&padded, &mut dst, kernel)?;
    Ok(dst)
}
