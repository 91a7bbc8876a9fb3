use std::path::Path;

use satblur_image::{ImageBuffer, ImageSize};

use crate::error::IoError;

/// Decode a compressed image byte stream into an RGBA8 buffer.
///
/// Any format supported by the image crate is accepted; images without an
/// alpha channel are expanded to fully opaque alpha.
///
/// # Arguments
///
/// * `data` - The raw compressed bytes, e.g. the contents of a PNG file.
///
/// # Returns
///
/// The decoded buffer with its extents.
///
/// # Errors
///
/// Returns an error if the bytes are not a decodable image.
pub fn decode_image_rgba8(data: &[u8]) -> Result<ImageBuffer<u8>, IoError> {
    let decoded = image::load_from_memory(data)?.to_rgba8();
    let size = ImageSize {
        width: decoded.width() as usize,
        height: decoded.height() as usize,
    };
    let buffer = ImageBuffer::from_rgba8(size, decoded.as_raw())?;

    log::debug!("decoded image {}x{} (RGBA)", size.width, size.height);

    Ok(buffer)
}

/// Read an image file and decode it into an RGBA8 buffer.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Errors
///
/// Returns an error if the file does not exist or cannot be decoded.
pub fn read_image_any_rgba8(file_path: impl AsRef<Path>) -> Result<ImageBuffer<u8>, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let data = std::fs::read(file_path)?;
    decode_image_rgba8(&data)
}

/// Write an RGBA8 buffer to a binary PPM (P6) file, dropping alpha.
///
/// # Arguments
///
/// * `file_path` - The path of the output file.
/// * `image` - The buffer to encode.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_image_ppm(file_path: impl AsRef<Path>, image: &ImageBuffer<u8>) -> Result<(), IoError> {
    let header = format!("P6\n{} {}\n255\n", image.width(), image.height());

    let mut out = Vec::with_capacity(header.len() + image.width() * image.height() * 3);
    out.extend_from_slice(header.as_bytes());
    for px in image.as_slice() {
        out.extend_from_slice(&[px.r, px.g, px.b]);
    }

    std::fs::write(file_path, out)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use satblur_image::{Pixel, Rgba};

    fn encode_png(size: ImageSize, pixels: &[Pixel]) -> Vec<u8> {
        let mut raw = Vec::with_capacity(pixels.len() * 4);
        for px in pixels {
            raw.extend_from_slice(&[px.r, px.g, px.b, px.a]);
        }
        let img = image::RgbaImage::from_raw(size.width as u32, size.height as u32, raw)
            .expect("extents match");
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)
            .expect("png encode");
        out.into_inner()
    }

    #[test]
    fn decode_round_trips_png() -> Result<(), IoError> {
        let size = ImageSize {
            width: 2,
            height: 2,
        };
        let pixels = vec![
            Rgba::new(255, 0, 0, 255),
            Rgba::new(0, 255, 0, 255),
            Rgba::new(0, 0, 255, 255),
            Rgba::new(10, 20, 30, 255),
        ];
        let png = encode_png(size, &pixels);

        let decoded = decode_image_rgba8(&png)?;
        assert_eq!(decoded.size(), size);
        assert_eq!(decoded.as_slice(), pixels.as_slice());

        Ok(())
    }

    #[test]
    fn decode_rejects_garbage() {
        let res = decode_image_rgba8(&[0xde, 0xad, 0xbe, 0xef]);
        assert!(res.is_err());
    }

    #[test]
    fn read_missing_file_is_an_error() {
        let res = read_image_any_rgba8("/definitely/not/a/file.png");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn write_ppm_drops_alpha() -> Result<(), IoError> {
        let size = ImageSize {
            width: 2,
            height: 1,
        };
        let buffer = ImageBuffer::new(
            size,
            vec![Rgba::new(1, 2, 3, 200), Rgba::new(4, 5, 6, 100)],
        )?;

        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.ppm");
        write_image_ppm(&path, &buffer)?;

        let written = std::fs::read(&path)?;
        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(written, expected);

        Ok(())
    }
}
