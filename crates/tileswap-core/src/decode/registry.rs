//! Explicit registry mapping magic bytes to format decoders.

use log::{debug, info};

use super::formats::{FormatDecoder, GifDecoder, JpegDecoder, PngDecoder, WebPDecoder};
use super::{DecodeError, DecodedImage, ImageFormat};

/// An ordered set of decoders. The first decoder whose signature matches
/// the input wins.
#[derive(Default)]
pub struct DecoderRegistry {
    decoders: Vec<Box<dyn FormatDecoder>>,
}

impl DecoderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every built-in format: PNG, WebP, JPEG and GIF.
    pub fn with_default_formats() -> Self {
        let mut registry = Self::new();
        registry.register(PngDecoder);
        registry.register(WebPDecoder);
        registry.register(JpegDecoder);
        registry.register(GifDecoder);
        registry
    }

    /// Add a decoder after the already registered ones.
    pub fn register<D: FormatDecoder + 'static>(&mut self, decoder: D) {
        self.decoders.push(Box::new(decoder));
    }

    /// Registered formats in lookup order.
    pub fn formats(&self) -> Vec<ImageFormat> {
        self.decoders.iter().map(|d| d.format()).collect()
    }

    /// Sniff the format of `bytes` without decoding.
    pub fn detect(&self, bytes: &[u8]) -> Option<ImageFormat> {
        self.find(bytes).map(|d| d.format())
    }

    /// Decode `bytes` with the first matching decoder.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::UnrecognizedFormat` if no decoder matches and
    /// `DecodeError::Corrupted` if the matching decoder fails.
    pub fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
        let decoder = self.find(bytes).ok_or(DecodeError::UnrecognizedFormat)?;
        let format = decoder.format();
        debug!("decoding {} bytes as {format}", bytes.len());

        let image = decoder.decode(bytes)?;
        info!("decoded {format} image, {}x{}", image.width(), image.height());

        Ok(DecodedImage::new(format, image))
    }

    fn find(&self, bytes: &[u8]) -> Option<&dyn FormatDecoder> {
        self.decoders
            .iter()
            .map(|d| d.as_ref())
            .find(|d| d.matches(bytes))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_util::{encode_as, gradient_image};
    use super::*;

    #[test]
    fn test_default_formats() {
        let registry = DecoderRegistry::with_default_formats();
        assert_eq!(
            registry.formats(),
            vec![
                ImageFormat::Png,
                ImageFormat::WebP,
                ImageFormat::Jpeg,
                ImageFormat::Gif
            ]
        );
    }

    #[test]
    fn test_detect() {
        let registry = DecoderRegistry::with_default_formats();
        let img = gradient_image(8, 8);

        let png = encode_as(&img, image::ImageFormat::Png);
        let webp = encode_as(&img, image::ImageFormat::WebP);
        assert_eq!(registry.detect(&png), Some(ImageFormat::Png));
        assert_eq!(registry.detect(&webp), Some(ImageFormat::WebP));
        assert_eq!(registry.detect(b"not an image"), None);
        assert_eq!(registry.detect(&[]), None);
    }

    #[test]
    fn test_decode_reports_format() {
        let registry = DecoderRegistry::with_default_formats();
        let img = gradient_image(8, 4);
        let bytes = encode_as(&img, image::ImageFormat::WebP);

        let decoded = registry.decode(&bytes).unwrap();
        assert_eq!(decoded.format, ImageFormat::WebP);
        assert_eq!(decoded.image, img);
    }

    #[test]
    fn test_empty_registry_rejects_everything() {
        let registry = DecoderRegistry::new();
        let bytes = encode_as(&gradient_image(4, 4), image::ImageFormat::Png);

        assert!(registry.formats().is_empty());
        assert!(matches!(
            registry.decode(&bytes),
            Err(DecodeError::UnrecognizedFormat)
        ));
    }

    #[test]
    fn test_registration_is_explicit() {
        let mut registry = DecoderRegistry::new();
        registry.register(PngDecoder);

        let webp = encode_as(&gradient_image(4, 4), image::ImageFormat::WebP);
        assert!(matches!(
            registry.decode(&webp),
            Err(DecodeError::UnrecognizedFormat)
        ));

        registry.register(WebPDecoder);
        assert!(registry.decode(&webp).is_ok());
    }

    #[test]
    fn test_garbage_is_unrecognized() {
        let registry = DecoderRegistry::with_default_formats();
        let result = registry.decode(&[0u8; 64]);
        assert!(matches!(result, Err(DecodeError::UnrecognizedFormat)));
    }
}
