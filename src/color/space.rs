//! Conversions between hex strings, RGB and HSL.
//!
//! All intermediate math is done in `f64`. Channels are rounded half-up and
//! clamped to `[0, 255]` only at the final step, so an HSL round trip through
//! RGB is exact to within one unit per channel.

use crate::error::{Error, Result};
use crate::models::{Hsl, RgbColor};

/// Parses a strict `#RRGGBB` string into RGB channels.
///
/// Exactly `#` followed by six hex digits of either case. Three-digit
/// shorthand must be expanded by the caller.
pub fn hex_to_rgb(hex: &str) -> Result<RgbColor> {
    let bytes = hex.as_bytes();
    if bytes.len() != 7 || bytes[0] != b'#' || !bytes[1..].iter().all(u8::is_ascii_hexdigit) {
        return Err(Error::invalid_color(hex));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| Error::invalid_color(hex))
    };

    Ok(RgbColor::new(channel(1..3)?, channel(3..5)?, channel(5..7)?))
}

/// Converts 8-bit RGB channels to HSL.
///
/// Achromatic colors (all channels equal) get hue 0 and saturation 0.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new((sector * 60.0).rem_euclid(360.0), s * 100.0, l * 100.0)
}

/// Converts HSL to 8-bit RGB.
///
/// Hue is wrapped into `[0, 360)`; saturation and lightness are clamped into
/// `[0, 100]`.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> RgbColor {
    let h = h.rem_euclid(360.0);
    let s = s.clamp(0.0, 100.0);
    let l = l.clamp(0.0, 100.0) / 100.0;
    let a = s * l.min(1.0 - l) / 100.0;

    let channel = |n: f64| {
        let k = (n + h / 30.0) % 12.0;
        let value = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        round_channel(255.0 * value)
    };

    RgbColor::new(channel(0.0), channel(8.0), channel(4.0))
}

/// Parses a hex string straight to HSL.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    hex_to_rgb(hex).map(|c| rgb_to_hsl(c.r, c.g, c.b))
}

/// Converts HSL straight to a lower-case `#rrggbb` string.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    hsl_to_rgb(h, s, l).to_hex()
}

/// Rounds half-up and clamps into the 8-bit channel range.
fn round_channel(value: f64) -> u8 {
    (value + 0.5).floor().clamp(0.0, 255.0) as u8
}
