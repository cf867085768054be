//! Format decoders backed by the `image` crate.
//!
//! Each decoder recognizes its format by magic bytes and normalizes the
//! decoded pixels to RGBA8.

use image::{load_from_memory_with_format, RgbaImage};

use super::{DecodeError, ImageFormat};

/// A decoder for one raster format.
pub trait FormatDecoder {
    /// The format this decoder handles.
    fn format(&self) -> ImageFormat;

    /// Returns true if `header` starts with this format's signature.
    fn matches(&self, header: &[u8]) -> bool;

    /// Decode a complete file into an RGBA8 buffer.
    fn decode(&self, bytes: &[u8]) -> Result<RgbaImage, DecodeError> {
        decode_with_image_crate(self.format(), bytes)
    }
}

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];
const GIF87_MAGIC: &[u8] = b"GIF87a";
const GIF89_MAGIC: &[u8] = b"GIF89a";

/// PNG decoder.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngDecoder;

impl FormatDecoder for PngDecoder {
    fn format(&self) -> ImageFormat {
        ImageFormat::Png
    }

    fn matches(&self, header: &[u8]) -> bool {
        header.starts_with(PNG_MAGIC)
    }
}

/// WebP decoder (lossy and lossless).
#[derive(Debug, Default, Clone, Copy)]
pub struct WebPDecoder;

impl FormatDecoder for WebPDecoder {
    fn format(&self) -> ImageFormat {
        ImageFormat::WebP
    }

    // RIFF container: "RIFF", 4-byte little-endian size, "WEBP"
    fn matches(&self, header: &[u8]) -> bool {
        header.len() >= 12 && &header[0..4] == b"RIFF" && &header[8..12] == b"WEBP"
    }
}

/// Baseline and progressive JPEG decoder.
#[derive(Debug, Default, Clone, Copy)]
pub struct JpegDecoder;

impl FormatDecoder for JpegDecoder {
    fn format(&self) -> ImageFormat {
        ImageFormat::Jpeg
    }

    fn matches(&self, header: &[u8]) -> bool {
        header.starts_with(JPEG_MAGIC)
    }
}

/// GIF decoder. Only the first frame is decoded.
#[derive(Debug, Default, Clone, Copy)]
pub struct GifDecoder;

impl FormatDecoder for GifDecoder {
    fn format(&self) -> ImageFormat {
        ImageFormat::Gif
    }

    fn matches(&self, header: &[u8]) -> bool {
        header.starts_with(GIF87_MAGIC) || header.starts_with(GIF89_MAGIC)
    }
}

fn decode_with_image_crate(format: ImageFormat, bytes: &[u8]) -> Result<RgbaImage, DecodeError> {
    let img = load_from_memory_with_format(bytes, format.to_image_format()).map_err(|e| {
        DecodeError::Corrupted {
            format,
            message: e.to_string(),
        }
    })?;

    Ok(img.into_rgba8())
}
