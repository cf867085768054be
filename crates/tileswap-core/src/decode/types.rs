//! Core types for image decoding.

use std::fmt;

use image::RgbaImage;
use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// No registered decoder recognizes the leading bytes.
    #[error("Invalid or unsupported image format")]
    UnrecognizedFormat,

    /// A decoder claimed the data but could not decode it.
    #[error("Corrupted or incomplete {format} file: {message}")]
    Corrupted {
        format: ImageFormat,
        message: String,
    },
}

/// Raster formats that can be registered with a [`DecoderRegistry`].
///
/// [`DecoderRegistry`]: super::DecoderRegistry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    WebP,
    Jpeg,
    Gif,
}

impl ImageFormat {
    /// Short lowercase name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::WebP => "webp",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Gif => "gif",
        }
    }

    /// Convert to the image crate's ImageFormat.
    pub fn to_image_format(self) -> image::ImageFormat {
        match self {
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::WebP => image::ImageFormat::WebP,
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Gif => image::ImageFormat::Gif,
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded image normalized to 8-bit RGBA.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Format the bytes were decoded from. Only used for diagnostics.
    pub format: ImageFormat,
    /// Pixel buffer with straight (non-premultiplied) alpha.
    pub image: RgbaImage,
}

impl DecodedImage {
    pub fn new(format: ImageFormat, image: RgbaImage) -> Self {
        Self { format, image }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Consume the wrapper and return the pixel buffer.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_conversion() {
        assert_eq!(ImageFormat::Png.to_image_format(), image::ImageFormat::Png);
        assert_eq!(ImageFormat::WebP.to_image_format(), image::ImageFormat::WebP);
        assert_eq!(ImageFormat::Jpeg.to_image_format(), image::ImageFormat::Jpeg);
        assert_eq!(ImageFormat::Gif.to_image_format(), image::ImageFormat::Gif);
    }

    #[test]
    fn test_format_display() {
        assert_eq!(ImageFormat::WebP.to_string(), "webp");
        assert_eq!(ImageFormat::Png.to_string(), "png");
    }

    #[test]
    fn test_decoded_image_dimensions() {
        let decoded = DecodedImage::new(ImageFormat::Png, RgbaImage::new(12, 8));
        assert_eq!(decoded.width(), 12);
        assert_eq!(decoded.height(), 8);
        assert_eq!(decoded.into_image().dimensions(), (12, 8));
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::UnrecognizedFormat;
        assert_eq!(err.to_string(), "Invalid or unsupported image format");

        let err = DecodeError::Corrupted {
            format: ImageFormat::Png,
            message: "unexpected end of file".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Corrupted or incomplete png file: unexpected end of file"
        );
    }
}
