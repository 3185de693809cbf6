//! RGB color handling with strict hex parsing and serialization.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Hsl;
use crate::color::space;
use crate::error::{Error, Result};

/// RGB color value with a lossless `#rrggbb` text form.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Serializes as a lower-case hex string so stored palettes stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a strict `#RRGGBB` hex string.
    ///
    /// Digits may be upper or lower case. Shorthand (`#FFF`), a missing `#`
    /// and surrounding whitespace are all rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use hueforge::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// assert!(RgbColor::from_hex("#F00").is_err());
    /// assert!(RgbColor::from_hex("00FF00").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        space::hex_to_rgb(hex)
    }

    /// Converts the color to a hex string in the format "#rrggbb" (lower-case).
    ///
    /// # Examples
    ///
    /// ```
    /// use hueforge::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(0, 102, 255).to_hex(), "#0066ff");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts the color to HSL.
    #[must_use]
    pub fn to_hsl(&self) -> Hsl {
        space::rgb_to_hsl(self.r, self.g, self.b)
    }

    /// Creates a color from HSL components, normalizing hue and clamping
    /// saturation/lightness.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        space::hsl_to_rgb(hsl.h, hsl.s, hsl.l)
    }

    /// Largest per-channel distance to another color.
    #[must_use]
    pub const fn channel_distance(&self, other: &Self) -> u8 {
        let dr = self.r.abs_diff(other.r);
        let dg = self.g.abs_diff(other.g);
        let db = self.b.abs_diff(other.b);
        let max = if dr > dg { dr } else { dg };
        if max > db {
            max
        } else {
            db
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for RgbColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        let color = RgbColor::from_hex("#FF0000").unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 0));

        let color = RgbColor::from_hex("#0000ff").unwrap();
        assert_eq!(color, RgbColor::new(0, 0, 255));

        let color = RgbColor::from_hex("#0066Ff").unwrap();
        assert_eq!(color, RgbColor::new(0, 102, 255));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#FFF").is_err());
        assert!(RgbColor::from_hex("#FFFFFFF").is_err());
        assert!(RgbColor::from_hex("FFFFFF").is_err());
        assert!(RgbColor::from_hex("#GGGGGG").is_err());
        assert!(RgbColor::from_hex(" #FFFFFF").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#").is_err());
    }

    #[test]
    fn test_to_hex_is_lower_case_and_padded() {
        assert_eq!(RgbColor::new(255, 0, 0).to_hex(), "#ff0000");
        assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080ff");
        assert_eq!(RgbColor::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(RgbColor::new(1, 2, 3).to_hex(), "#010203");
    }

    #[test]
    fn test_roundtrip() {
        let original = RgbColor::new(123, 45, 67);
        let parsed = RgbColor::from_hex(&original.to_hex()).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let color = RgbColor::new(0x22, 0xC5, 0x5E);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#22c55e\"");

        let back: RgbColor = serde_json::from_str("\"#22C55E\"").unwrap();
        assert_eq!(back, color);

        let bad: std::result::Result<RgbColor, _> = serde_json::from_str("\"#22C\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_hsl_roundtrip_primaries() {
        let colors = vec![
            RgbColor::new(255, 0, 0),
            RgbColor::new(0, 255, 0),
            RgbColor::new(0, 0, 255),
            RgbColor::new(255, 255, 0),
            RgbColor::new(128, 64, 192),
            RgbColor::new(200, 100, 50),
        ];

        for color in colors {
            let converted = RgbColor::from_hsl(color.to_hsl());
            assert!(
                color.channel_distance(&converted) <= 1,
                "{} -> {}",
                color,
                converted
            );
        }
    }

    #[test]
    fn test_channel_distance() {
        let a = RgbColor::new(10, 20, 30);
        let b = RgbColor::new(12, 15, 30);
        assert_eq!(a.channel_distance(&b), 5);
        assert_eq!(a.channel_distance(&a), 0);
    }
}
