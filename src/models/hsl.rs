//! HSL view of a color, used for harmony math.

use serde::{Deserialize, Serialize};

/// Hue/saturation/lightness triple.
///
/// - `h`: hue in degrees, `[0, 360)`
/// - `s`: saturation in percent, `[0, 100]`
/// - `l`: lightness in percent, `[0, 100]`
///
/// Values are kept as floats; rounding only happens when converting back to
/// 8-bit RGB.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees
    pub h: f64,
    /// Saturation percentage
    pub s: f64,
    /// Lightness percentage
    pub l: f64,
}

impl Hsl {
    /// Creates a new HSL value without normalization.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Returns this color rotated around the wheel by `degrees`, wrapped into
    /// `[0, 360)`.
    #[must_use]
    pub fn rotate(self, degrees: f64) -> Self {
        Self {
            h: (self.h + degrees).rem_euclid(360.0),
            ..self
        }
    }

    /// Returns a copy with saturation replaced and clamped into `[0, 100]`.
    #[must_use]
    pub fn with_saturation(self, s: f64) -> Self {
        Self {
            s: s.clamp(0.0, 100.0),
            ..self
        }
    }

    /// Returns a copy with lightness replaced and clamped into `[0, 100]`.
    #[must_use]
    pub fn with_lightness(self, l: f64) -> Self {
        Self {
            l: l.clamp(0.0, 100.0),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_wraps() {
        let hsl = Hsl::new(217.0, 100.0, 50.0);
        assert!((hsl.rotate(180.0).h - 37.0).abs() < 1e-9);
        assert!((hsl.rotate(-240.0).h - 337.0).abs() < 1e-9);
        assert!((Hsl::new(10.0, 0.0, 0.0).rotate(-30.0).h - 340.0).abs() < 1e-9);
    }

    #[test]
    fn test_with_clamps() {
        let hsl = Hsl::new(0.0, 50.0, 50.0);
        assert_eq!(hsl.with_saturation(140.0).s, 100.0);
        assert_eq!(hsl.with_lightness(-5.0).l, 0.0);
        assert_eq!(hsl.with_lightness(42.5).l, 42.5);
    }
}
