//! Tileswap Core - tile-grid transposition for raster images
//!
//! This crate splits an image into a 4x4 grid of tiles, moves the tile at
//! (row, col) to (col, row) and encodes the result as PNG. It provides the
//! format registry, the tiling and compositing code, the PNG encoder and a
//! [`Pipeline`] that ties them together for one input file.

pub mod decode;
pub mod encode;
mod error;
pub mod output;
pub mod pipeline;
pub mod transform;

#[cfg(test)]
mod test_util;

pub use decode::{DecodeError, DecodedImage, DecoderRegistry, ImageFormat};
pub use encode::{encode_png, EncodeError};
pub use error::Error;
pub use output::png_output_path;
pub use pipeline::{Pipeline, Stage};
pub use transform::{transpose, GridError, GridSpec, TileIndex};
