//! Seed-color harmony generation.
//!
//! Every strategy keeps the seed as `primary` and derives the other four
//! required roles from the seed's HSL. Status colors are always the brand
//! constants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{ColorPalette, Hsl, RgbColor};

/// Color-wheel rule used to derive a palette from one seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyStrategy {
    /// Opposite side of the wheel
    #[default]
    Complementary,
    /// Neighbours at ±30°
    Analogous,
    /// Thirds of the wheel, +120° and +240°
    Triadic,
    /// Same hue, varied saturation and lightness
    Monochromatic,
}

impl HarmonyStrategy {
    /// All strategies.
    pub const ALL: [Self; 4] = [
        Self::Complementary,
        Self::Analogous,
        Self::Triadic,
        Self::Monochromatic,
    ];

    /// Lower-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::Monochromatic => "monochromatic",
        }
    }

    /// Hue offsets of the secondary and accent roles.
    const fn offsets(self) -> (f64, f64) {
        match self {
            Self::Complementary => (180.0, 180.0),
            Self::Analogous => (30.0, -30.0),
            Self::Triadic => (120.0, 240.0),
            Self::Monochromatic => (0.0, 0.0),
        }
    }
}

impl fmt::Display for HarmonyStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HarmonyStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownHarmony {
                name: s.to_string(),
            })
    }
}

/// One labeled candidate palette.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    /// Style label shown next to the candidate
    pub label: &'static str,
    /// Strategy that produced it
    pub strategy: HarmonyStrategy,
    /// The palette
    pub palette: ColorPalette,
}

/// Suggestion order and labels.
const SUGGESTIONS: [(HarmonyStrategy, &str); 4] = [
    (HarmonyStrategy::Analogous, "modern"),
    (HarmonyStrategy::Triadic, "classic"),
    (HarmonyStrategy::Monochromatic, "natural"),
    (HarmonyStrategy::Complementary, "luxury"),
];

fn shade(base: Hsl, degrees: f64, s: f64, l: f64) -> RgbColor {
    RgbColor::from_hsl(base.rotate(degrees).with_saturation(s).with_lightness(l))
}

/// Generates a palette from `seed` using `strategy`.
///
/// Deterministic: the same inputs always give the same palette.
///
/// # Examples
///
/// ```
/// use hueforge::color::{generate, HarmonyStrategy};
/// use hueforge::models::RgbColor;
///
/// let seed: RgbColor = "#0066FF".parse().unwrap();
/// let palette = generate(seed, HarmonyStrategy::Complementary);
/// assert_eq!(palette.primary, seed);
/// ```
#[must_use]
pub fn generate(seed: RgbColor, strategy: HarmonyStrategy) -> ColorPalette {
    let base = seed.to_hsl();
    let Hsl { s, l, .. } = base;
    let (secondary_offset, accent_offset) = strategy.offsets();

    let palette = match strategy {
        HarmonyStrategy::Monochromatic => ColorPalette::new(
            seed,
            shade(base, 0.0, (s - 20.0).max(10.0), (l + 30.0).min(90.0)),
            shade(base, 0.0, (s + 10.0).min(100.0), (l - 15.0).max(20.0)),
            shade(base, 0.0, (s - 50.0).max(5.0), 95.0),
            shade(base, 0.0, (s + 5.0).min(20.0), 15.0),
        ),
        _ => ColorPalette::new(
            seed,
            shade(base, secondary_offset, (s - 30.0).max(10.0), (l + 40.0).min(95.0)),
            shade(base, accent_offset, s, (l - 10.0).max(20.0)),
            shade(base, 0.0, (s - 50.0).max(5.0), 95.0),
            shade(base, 0.0, (s + 10.0).min(20.0), 15.0),
        ),
    };

    debug!(
        %seed,
        %strategy,
        secondary = %palette.secondary,
        accent = %palette.accent,
        "generated harmony palette"
    );
    palette
}

/// Parses `seed_hex` strictly and generates a palette.
pub fn generate_from_hex(seed_hex: &str, strategy: HarmonyStrategy) -> Result<ColorPalette> {
    let seed = RgbColor::from_hex(seed_hex)?;
    Ok(generate(seed, strategy))
}

/// Produces one labeled palette per strategy.
#[must_use]
pub fn suggest(seed: RgbColor) -> Vec<Suggestion> {
    SUGGESTIONS
        .iter()
        .map(|&(strategy, label)| Suggestion {
            label,
            strategy,
            palette: generate(seed, strategy),
        })
        .collect()
}
