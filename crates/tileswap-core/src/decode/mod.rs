//! Image decoding for tileswap.
//!
//! This module provides functionality for:
//! - Sniffing the input format from its magic bytes
//! - Decoding PNG, WebP, JPEG and GIF files
//! - Normalizing every decoded image to 8-bit RGBA
//!
//! # Architecture
//!
//! Decoders are registered explicitly in a [`DecoderRegistry`] when the
//! process starts. Adding a format means implementing [`FormatDecoder`] and
//! registering it; the tiling and transposition code never sees the format.
//!
//! # Examples
//!
//! ```ignore
//! use tileswap_core::decode::DecoderRegistry;
//!
//! let bytes = std::fs::read("photo.webp").unwrap();
//! let decoded = DecoderRegistry::with_default_formats().decode(&bytes).unwrap();
//! println!("Decoded {} {}x{}", decoded.format, decoded.width(), decoded.height());
//! ```

mod formats;
mod registry;
mod types;

pub use formats::{FormatDecoder, GifDecoder, JpegDecoder, PngDecoder, WebPDecoder};
pub use registry::DecoderRegistry;
pub use types::{DecodeError, DecodedImage, ImageFormat};
