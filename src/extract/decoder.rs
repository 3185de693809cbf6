//! Image decoding capability.

use super::PixelBuffer;
use crate::error::Result;

/// Turns encoded image bytes into a [`PixelBuffer`].
///
/// Implementations must be usable from the extraction worker thread.
pub trait ImageDecoder: Send + Sync {
    /// Decodes `bytes`. Failures are reported as
    /// [`Error::ImageDecode`](crate::Error::ImageDecode).
    fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer>;
}

/// Decoder backed by the `image` crate (PNG, JPEG, GIF, BMP, WebP).
#[cfg(feature = "image")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCrateDecoder;

#[cfg(feature = "image")]
impl ImageDecoder for ImageCrateDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| crate::Error::ImageDecode(e.to_string()))?
            .to_rgba8();
        let (width, height) = image.dimensions();
        PixelBuffer::new(width, height, image.into_raw())
    }
}
