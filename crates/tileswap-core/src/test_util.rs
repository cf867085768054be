//! Shared fixtures for unit tests.

use std::io::Cursor;

use image::{DynamicImage, Rgba, RgbaImage};

/// Create an RGBA image with a position-dependent color at every pixel.
pub fn gradient_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x * 7 % 256) as u8,
            (y * 11 % 256) as u8,
            ((x + y) % 256) as u8,
            255,
        ])
    })
}

/// Distinct opaque color for the tile at (row, col).
pub fn tile_color(row: u32, col: u32) -> Rgba<u8> {
    Rgba([(row * 60 + 10) as u8, (col * 60 + 10) as u8, 200, 255])
}

/// Create an image where every tile of a `rows` x `cols` grid of
/// `part_width` x `part_height` tiles is filled with [`tile_color`].
pub fn tile_colored_image(rows: u32, cols: u32, part_width: u32, part_height: u32) -> RgbaImage {
    RgbaImage::from_fn(cols * part_width, rows * part_height, |x, y| {
        tile_color(y / part_height, x / part_width)
    })
}

/// Encode an image with the image crate's encoder for `format`.
pub fn encode_as(img: &RgbaImage, format: image::ImageFormat) -> Vec<u8> {
    let dynamic = match format {
        // JPEG has no alpha channel
        image::ImageFormat::Jpeg => {
            DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(img.clone()).into_rgb8())
        }
        _ => DynamicImage::ImageRgba8(img.clone()),
    };
    let mut buffer = Cursor::new(Vec::new());
    dynamic.write_to(&mut buffer, format).unwrap();
    buffer.into_inner()
}
