//! Dominant-color extraction from decoded bitmaps.
//!
//! The algorithm works on a [`PixelBuffer`] only. Turning encoded bytes into
//! pixels is the job of an [`ImageDecoder`], so extraction can be tested
//! without touching a real image codec.
//!
//! ## Algorithm
//!
//! - Visit every `stride`-th pixel starting at pixel 0 (alpha is ignored)
//! - Count exact RGB matches
//! - Rank by descending frequency; ties keep first-seen order
//! - The top five map positionally onto primary, secondary, accent,
//!   neutral and dark, with fallbacks for missing positions

pub mod decoder;
pub mod worker;

use serde::Serialize;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{ColorPalette, RgbColor};

#[cfg(feature = "image")]
pub use decoder::ImageCrateDecoder;
pub use decoder::ImageDecoder;
pub use worker::{ExtractionResult, ExtractionWorker, Ticket};

/// Number of ranked colors mapped onto the palette.
pub const PALETTE_SLOTS: usize = 5;

/// Default sampling stride.
pub const DEFAULT_SAMPLE_STRIDE: usize = 10;

/// A decoded RGBA bitmap, row-major, four bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl PixelBuffer {
    /// Wraps raw RGBA bytes, checking that the length matches the
    /// dimensions.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .unwrap_or(usize::MAX);
        if rgba.len() != expected {
            return Err(Error::InvalidPixelBuffer {
                width,
                height,
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// A buffer where every pixel is `color` (fully opaque).
    #[must_use]
    pub fn filled(width: u32, height: u32, color: RgbColor) -> Self {
        let pixels = width as usize * height as usize;
        let rgba = [color.r, color.g, color.b, 255].repeat(pixels);
        Self {
            width,
            height,
            rgba,
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels.
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.rgba.len() / 4
    }

    /// RGB value of pixel `index`, ignoring alpha.
    #[must_use]
    pub fn pixel(&self, index: usize) -> Option<RgbColor> {
        let offset = index.checked_mul(4)?;
        let px = self.rgba.get(offset..offset + 4)?;
        Some(RgbColor::new(px[0], px[1], px[2]))
    }

    /// Raw RGBA bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.rgba
    }
}

/// Extraction tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorOptions {
    /// Sample every n-th pixel
    pub stride: NonZeroUsize,
}

impl ExtractorOptions {
    /// Options with the given stride; `None` for a zero stride.
    #[must_use]
    pub fn with_stride(stride: usize) -> Option<Self> {
        NonZeroUsize::new(stride).map(|stride| Self { stride })
    }
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            stride: NonZeroUsize::new(DEFAULT_SAMPLE_STRIDE).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

/// One distinct sampled color and how often it was seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorSample {
    /// The color
    pub color: RgbColor,
    /// Number of sampled pixels with exactly this color
    pub frequency: usize,
}

/// Samples and ranks every distinct color, most frequent first.
#[must_use]
pub fn extract_samples(buffer: &PixelBuffer, options: ExtractorOptions) -> Vec<ColorSample> {
    let mut samples: Vec<ColorSample> = Vec::new();
    let mut index: HashMap<RgbColor, usize> = HashMap::new();

    for pixel in (0..buffer.pixel_count()).step_by(options.stride.get()) {
        let Some(color) = buffer.pixel(pixel) else {
            break;
        };
        match index.get(&color) {
            Some(&slot) => samples[slot].frequency += 1,
            None => {
                index.insert(color, samples.len());
                samples.push(ColorSample {
                    color,
                    frequency: 1,
                });
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    samples.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    samples
}

/// Extracts a palette from a decoded bitmap.
///
/// # Examples
///
/// ```
/// use hueforge::extract::{extract_palette, ExtractorOptions, PixelBuffer};
/// use hueforge::models::{ColorPalette, RgbColor};
///
/// let red = RgbColor::new(255, 0, 0);
/// let palette = extract_palette(&PixelBuffer::filled(10, 10, red), ExtractorOptions::default());
/// assert_eq!(palette.primary, red);
/// assert_eq!(palette.dark, ColorPalette::DEFAULT_DARK);
/// ```
#[must_use]
pub fn extract_palette(buffer: &PixelBuffer, options: ExtractorOptions) -> ColorPalette {
    let samples = extract_samples(buffer, options);
    let ranked: Vec<RgbColor> = samples
        .iter()
        .take(PALETTE_SLOTS)
        .map(|sample| sample.color)
        .collect();

    debug!(
        width = buffer.width(),
        height = buffer.height(),
        stride = options.stride.get(),
        distinct = samples.len(),
        "extracted palette"
    );
    ColorPalette::from_ranked(&ranked)
}

/// Decodes `bytes` with `decoder` and extracts a palette.
pub fn extract_from_bytes(
    decoder: &dyn ImageDecoder,
    bytes: &[u8],
    options: ExtractorOptions,
) -> Result<ColorPalette> {
    let buffer = decoder.decode(bytes)?;
    Ok(extract_palette(&buffer, options))
}
