//! WCAG relative luminance and contrast ratio.
//!
//! The accessibility threshold is the WCAG AA requirement for normal-size
//! text and is deliberately fixed, not configurable.

use crate::models::RgbColor;

/// Minimum contrast ratio for WCAG AA normal text.
pub const WCAG_AA_NORMAL_TEXT: f64 = 4.5;

/// Gamma-corrects one 8-bit sRGB channel to linear light.
fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Computes the relative luminance of a color.
///
/// Returns a value in `[0.0, 1.0]` where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: RgbColor) -> f64 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// Computes the contrast ratio between two colors.
///
/// The result is always `>= 1.0` and does not depend on argument order:
/// `(L_lighter + 0.05) / (L_darker + 0.05)`.
#[must_use]
pub fn contrast_ratio(a: RgbColor, b: RgbColor) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Returns true when `ratio` meets [`WCAG_AA_NORMAL_TEXT`].
#[must_use]
pub fn is_accessible(ratio: f64) -> bool {
    ratio >= WCAG_AA_NORMAL_TEXT
}
