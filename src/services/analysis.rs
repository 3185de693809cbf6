//! Palette diagnostics: accessibility, temperature and saturation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::{contrast_ratio, is_accessible};
use crate::models::ColorPalette;

/// Fixed usage guidance attached to every report.
pub const RECOMMENDATIONS: [&str; 4] = [
    "Use the primary color for important elements only",
    "Use the secondary color for backgrounds and large areas",
    "Use the accent color for interactions and notifications",
    "Keep text legible on every background",
];

/// Warm or cool, judged from the primary hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    /// Reds, oranges, yellows, magentas
    Warm,
    /// Greens, cyans, blues
    Cool,
}

impl Temperature {
    /// Classifies a hue in degrees.
    ///
    /// `[0, 60)` warm, `[60, 180)` cool, `[180, 240)` cool, everything else
    /// warm. Blues up to 240° therefore count as cool while violets and
    /// magentas count as warm.
    #[must_use]
    pub fn from_hue(hue: f64) -> Self {
        let hue = hue.rem_euclid(360.0);
        if (60.0..240.0).contains(&hue) {
            Self::Cool
        } else {
            Self::Warm
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Warm => "warm",
            Self::Cool => "cool",
        })
    }
}

/// Saturation bucket of the primary color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaturationLevel {
    /// Below 30%
    Low,
    /// 30% up to 70%
    Medium,
    /// 70% and above
    High,
}

impl SaturationLevel {
    /// Buckets a saturation percentage.
    #[must_use]
    pub fn from_saturation(s: f64) -> Self {
        if s < 30.0 {
            Self::Low
        } else if s < 70.0 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

impl fmt::Display for SaturationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

/// Result of [`analyze`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteReport {
    /// Contrast between primary and neutral
    pub contrast_ratio: f64,
    /// Whether that contrast meets WCAG AA for normal text
    pub accessible: bool,
    /// Temperature of the primary hue
    pub temperature: Temperature,
    /// Saturation bucket of the primary
    pub saturation: SaturationLevel,
    /// Usage guidance
    pub recommendations: Vec<String>,
}

/// Analyzes a palette.
#[must_use]
pub fn analyze(palette: &ColorPalette) -> PaletteReport {
    let ratio = contrast_ratio(palette.primary, palette.neutral);
    let primary = palette.primary.to_hsl();

    PaletteReport {
        contrast_ratio: ratio,
        accessible: is_accessible(ratio),
        temperature: Temperature::from_hue(primary.h),
        saturation: SaturationLevel::from_saturation(primary.s),
        recommendations: RECOMMENDATIONS.iter().map(|s| (*s).to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RgbColor;

    #[test]
    fn test_temperature_bands() {
        assert_eq!(Temperature::from_hue(0.0), Temperature::Warm);
        assert_eq!(Temperature::from_hue(59.9), Temperature::Warm);
        assert_eq!(Temperature::from_hue(60.0), Temperature::Cool);
        assert_eq!(Temperature::from_hue(179.0), Temperature::Cool);
        assert_eq!(Temperature::from_hue(200.0), Temperature::Cool);
        assert_eq!(Temperature::from_hue(239.9), Temperature::Cool);
        assert_eq!(Temperature::from_hue(240.0), Temperature::Warm);
        assert_eq!(Temperature::from_hue(330.0), Temperature::Warm);
    }

    #[test]
    fn test_saturation_buckets() {
        assert_eq!(SaturationLevel::from_saturation(0.0), SaturationLevel::Low);
        assert_eq!(SaturationLevel::from_saturation(29.9), SaturationLevel::Low);
        assert_eq!(SaturationLevel::from_saturation(30.0), SaturationLevel::Medium);
        assert_eq!(SaturationLevel::from_saturation(69.9), SaturationLevel::Medium);
        assert_eq!(SaturationLevel::from_saturation(70.0), SaturationLevel::High);
    }

    #[test]
    fn test_default_palette_report() {
        let report = analyze(&ColorPalette::default());
        // #0066ff on white
        assert!(report.contrast_ratio > 4.5);
        assert!(report.accessible);
        assert_eq!(report.temperature, Temperature::Cool);
        assert_eq!(report.saturation, SaturationLevel::High);
        assert_eq!(report.recommendations.len(), 4);
    }

    #[test]
    fn test_low_contrast_palette() {
        let mut palette = ColorPalette::default();
        palette.primary = RgbColor::new(0x77, 0x77, 0x77);
        let report = analyze(&palette);
        assert!(!report.accessible);
        assert_eq!(report.saturation, SaturationLevel::Low);
        assert_eq!(report.temperature, Temperature::Warm);
    }

    #[test]
    fn test_report_json_shape() {
        let value = serde_json::to_value(analyze(&ColorPalette::default())).unwrap();
        assert_eq!(value["temperature"], "cool");
        assert_eq!(value["saturation"], "high");
        assert_eq!(value["accessible"], true);
    }
}
