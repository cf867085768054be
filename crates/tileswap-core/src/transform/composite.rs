//! Source-over compositing for straight-alpha RGBA8 pixels.
//!
//! With source alpha `sa` and destination alpha `da` (both in 0..=1):
//!
//! ```text
//! out_a = sa + da * (1 - sa)
//! out_c = (sc * sa + dc * da * (1 - sa)) / out_a
//! ```
//!
//! The arithmetic is done in integers scaled by 255, so a fully opaque
//! source and a fully transparent destination both reproduce the source
//! exactly.

use image::Rgba;

/// Composite `src` over `dst`.
#[inline]
pub fn composite_over(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let sa = src[3] as u32;
    if sa == 255 {
        return src;
    }
    if sa == 0 {
        return dst;
    }

    let da = dst[3] as u32;
    // Both alphas scaled to 255 * 255
    let src_weight = sa * 255;
    let dst_weight = da * (255 - sa);
    let out_weight = src_weight + dst_weight;

    let channel = |c: usize| -> u8 {
        let num = src[c] as u32 * src_weight + dst[c] as u32 * dst_weight;
        ((num + out_weight / 2) / out_weight) as u8
    };

    Rgba([
        channel(0),
        channel(1),
        channel(2),
        ((out_weight + 127) / 255) as u8,
    ])
}
