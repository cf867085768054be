//! Image encoding for tileswap.
//!
//! This module provides functionality for:
//! - Encoding the transposed buffer as an RGBA PNG
//!
//! # Examples
//!
//! ```ignore
//! use tileswap_core::encode::encode_png;
//!
//! let image = image::RgbaImage::new(64, 64);
//! let png_bytes = encode_png(&image).unwrap();
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod png;

pub use png::{encode_png, EncodeError};
