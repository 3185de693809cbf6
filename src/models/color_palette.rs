//! Semantic color palette shared by every part of the engine.
//!
//! A palette has five required roles (`primary`, `secondary`, `accent`,
//! `neutral`, `dark`) and three optional status roles (`success`, `warning`,
//! `error`) that fall back to fixed brand constants when absent. Extra named
//! colors found in stored palettes are kept in [`ColorPalette::custom`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::RgbColor;
use crate::error::{Error, Result};

/// Brand color for success states (`#22c55e`).
pub const BRAND_SUCCESS: RgbColor = RgbColor::new(0x22, 0xC5, 0x5E);
/// Brand color for warning states (`#f59e0b`).
pub const BRAND_WARNING: RgbColor = RgbColor::new(0xF5, 0x9E, 0x0B);
/// Brand color for error states (`#ef4444`).
pub const BRAND_ERROR: RgbColor = RgbColor::new(0xEF, 0x44, 0x44);

/// A named slot in a [`ColorPalette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteRole {
    /// Main brand color, used for important elements.
    Primary,
    /// Backgrounds and large surfaces.
    Secondary,
    /// Interactions and notifications.
    Accent,
    /// Near-white base.
    Neutral,
    /// Near-black text color.
    Dark,
    /// Success status.
    Success,
    /// Warning status.
    Warning,
    /// Error status.
    Error,
}

impl PaletteRole {
    /// Required roles, in positional order.
    pub const REQUIRED: [Self; 5] = [
        Self::Primary,
        Self::Secondary,
        Self::Accent,
        Self::Neutral,
        Self::Dark,
    ];

    /// All roles, required first.
    pub const ALL: [Self; 8] = [
        Self::Primary,
        Self::Secondary,
        Self::Accent,
        Self::Neutral,
        Self::Dark,
        Self::Success,
        Self::Warning,
        Self::Error,
    ];

    /// Key used in serialized palettes.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Neutral => "neutral",
            Self::Dark => "dark",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Looks up a role by its serialized key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.key() == key)
    }

    /// Returns true for the five required roles.
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Success | Self::Warning | Self::Error)
    }
}

/// A complete storefront palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    /// Main brand color
    pub primary: RgbColor,
    /// Background / large-area color
    pub secondary: RgbColor,
    /// Interaction color
    pub accent: RgbColor,
    /// Near-white base color
    pub neutral: RgbColor,
    /// Near-black text color
    pub dark: RgbColor,
    /// Success status color (brand default when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<RgbColor>,
    /// Warning status color (brand default when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<RgbColor>,
    /// Error status color (brand default when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RgbColor>,
    /// Additional named colors carried through verbatim
    #[serde(flatten)]
    pub custom: BTreeMap<String, RgbColor>,
}

impl ColorPalette {
    /// Default primary (`#0066ff`), also the first image-extraction fallback.
    pub const DEFAULT_PRIMARY: RgbColor = RgbColor::new(0x00, 0x66, 0xFF);
    /// Default secondary (`#f0f4f8`).
    pub const DEFAULT_SECONDARY: RgbColor = RgbColor::new(0xF0, 0xF4, 0xF8);
    /// Default accent (`#0052cc`).
    pub const DEFAULT_ACCENT: RgbColor = RgbColor::new(0x00, 0x52, 0xCC);
    /// Default neutral (`#ffffff`).
    pub const DEFAULT_NEUTRAL: RgbColor = RgbColor::new(0xFF, 0xFF, 0xFF);
    /// Default dark (`#1a1d21`).
    pub const DEFAULT_DARK: RgbColor = RgbColor::new(0x1A, 0x1D, 0x21);

    /// Fallback colors for the required roles, in positional order.
    pub const FALLBACKS: [RgbColor; 5] = [
        Self::DEFAULT_PRIMARY,
        Self::DEFAULT_SECONDARY,
        Self::DEFAULT_ACCENT,
        Self::DEFAULT_NEUTRAL,
        Self::DEFAULT_DARK,
    ];

    /// Creates a palette from the five required colors with the brand status
    /// colors filled in.
    #[must_use]
    pub fn new(
        primary: RgbColor,
        secondary: RgbColor,
        accent: RgbColor,
        neutral: RgbColor,
        dark: RgbColor,
    ) -> Self {
        Self {
            primary,
            secondary,
            accent,
            neutral,
            dark,
            success: Some(BRAND_SUCCESS),
            warning: Some(BRAND_WARNING),
            error: Some(BRAND_ERROR),
            custom: BTreeMap::new(),
        }
    }

    /// Builds a palette from string key/value pairs.
    ///
    /// Every value must be a strict `#RRGGBB` color. Keys other than the
    /// eight palette roles land in [`custom`](Self::custom).
    ///
    /// # Examples
    ///
    /// ```
    /// use hueforge::models::ColorPalette;
    /// use hueforge::Error;
    ///
    /// let err = ColorPalette::from_entries([("primary", "#0066FF")]).unwrap_err();
    /// assert!(matches!(err, Error::IncompletePalette { .. }));
    /// ```
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut roles: BTreeMap<PaletteRole, RgbColor> = BTreeMap::new();
        let mut custom = BTreeMap::new();

        for (key, value) in entries {
            let color = RgbColor::from_hex(value.as_ref())?;
            match PaletteRole::from_key(key.as_ref()) {
                Some(role) => {
                    roles.insert(role, color);
                }
                None => {
                    custom.insert(key.as_ref().to_string(), color);
                }
            }
        }

        let missing: Vec<String> = PaletteRole::REQUIRED
            .iter()
            .filter(|role| !roles.contains_key(role))
            .map(|role| role.key().to_string())
            .collect();
        if !missing.is_empty() {
            return Err(Error::IncompletePalette { missing });
        }

        let required = |role: PaletteRole| roles[&role];
        Ok(Self {
            primary: required(PaletteRole::Primary),
            secondary: required(PaletteRole::Secondary),
            accent: required(PaletteRole::Accent),
            neutral: required(PaletteRole::Neutral),
            dark: required(PaletteRole::Dark),
            success: roles.get(&PaletteRole::Success).copied(),
            warning: roles.get(&PaletteRole::Warning).copied(),
            error: roles.get(&PaletteRole::Error).copied(),
            custom,
        })
    }

    /// Parses a palette from JSON, reporting missing keys as
    /// [`Error::IncompletePalette`] and bad colors as
    /// [`Error::InvalidColorFormat`].
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: BTreeMap<String, String> =
            serde_json::from_str(json).map_err(|e| Error::InvalidPatch(e.to_string()))?;
        Self::from_entries(entries)
    }

    /// Builds a palette from a ranked color list, filling missing positions
    /// with [`FALLBACKS`](Self::FALLBACKS).
    #[must_use]
    pub fn from_ranked(colors: &[RgbColor]) -> Self {
        let slot = |i: usize| colors.get(i).copied().unwrap_or(Self::FALLBACKS[i]);
        Self::new(slot(0), slot(1), slot(2), slot(3), slot(4))
    }

    /// Returns the color for a role, resolving status defaults.
    #[must_use]
    pub fn get(&self, role: PaletteRole) -> RgbColor {
        match role {
            PaletteRole::Primary => self.primary,
            PaletteRole::Secondary => self.secondary,
            PaletteRole::Accent => self.accent,
            PaletteRole::Neutral => self.neutral,
            PaletteRole::Dark => self.dark,
            PaletteRole::Success => self.success.unwrap_or(BRAND_SUCCESS),
            PaletteRole::Warning => self.warning.unwrap_or(BRAND_WARNING),
            PaletteRole::Error => self.error.unwrap_or(BRAND_ERROR),
        }
    }

    /// Sets the color for a role.
    pub fn set(&mut self, role: PaletteRole, color: RgbColor) {
        match role {
            PaletteRole::Primary => self.primary = color,
            PaletteRole::Secondary => self.secondary = color,
            PaletteRole::Accent => self.accent = color,
            PaletteRole::Neutral => self.neutral = color,
            PaletteRole::Dark => self.dark = color,
            PaletteRole::Success => self.success = Some(color),
            PaletteRole::Warning => self.warning = Some(color),
            PaletteRole::Error => self.error = Some(color),
        }
    }

    /// Success color, or the brand default.
    #[must_use]
    pub fn success(&self) -> RgbColor {
        self.get(PaletteRole::Success)
    }

    /// Warning color, or the brand default.
    #[must_use]
    pub fn warning(&self) -> RgbColor {
        self.get(PaletteRole::Warning)
    }

    /// Error color, or the brand default.
    #[must_use]
    pub fn error(&self) -> RgbColor {
        self.get(PaletteRole::Error)
    }

    /// All named colors: the eight roles (status defaults resolved) followed
    /// by custom colors in key order.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, RgbColor)> {
        PaletteRole::ALL
            .iter()
            .map(|role| (role.key().to_string(), self.get(*role)))
            .chain(self.custom.iter().map(|(k, v)| (k.clone(), *v)))
            .collect()
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        let [primary, secondary, accent, neutral, dark] = Self::FALLBACKS;
        Self::new(primary, secondary, accent, neutral, dark)
    }
}
