//! Theme configuration, customization patches and catalog templates.
//!
//! The `typography`, `layout` and `effects` sections are free-form key/value
//! bags: the storefront allows arbitrary style extensions, so unknown keys
//! are kept verbatim. Typed accessors cover the keys the engine knows about.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::{ColorPalette, PaletteRole, RgbColor};
use crate::error::{Error, Result};

/// Known typography keys.
pub mod keys {
    /// Body font family.
    pub const FONT_FAMILY: &str = "fontFamily";
    /// Heading font family.
    pub const HEADING_FONT: &str = "headingFont";
    /// Base font size in pixels.
    pub const FONT_SIZE: &str = "fontSize";
    /// Corner radius, CSS length.
    pub const BORDER_RADIUS: &str = "borderRadius";
    /// Spacing token (`tight`, `medium`, `comfortable`, `spacious`).
    pub const SPACING: &str = "spacing";
    /// Card style token.
    pub const CARD_STYLE: &str = "cardStyle";
    /// Shadow token (`none`, `subtle`, `medium`, `strong`, `elegant`).
    pub const SHADOWS: &str = "shadows";
    /// Animation token.
    pub const ANIMATIONS: &str = "animations";
    /// Whether gradients are enabled.
    pub const GRADIENTS: &str = "gradients";
    /// Whether hover effects are enabled.
    pub const HOVER_EFFECTS: &str = "hoverEffects";
}

/// A free-form style section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSection(pub Map<String, Value>);

impl StyleSection {
    /// Creates an empty section.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets a key, replacing any previous value.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Raw value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String value for a key, if present and a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Numeric value for a key. Numeric strings such as `"16"` or `"16px"`
    /// are accepted because stored themes use both forms.
    #[must_use]
    pub fn get_number(&self, key: &str) -> Option<f64> {
        match self.0.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().trim_end_matches("px").trim().parse().ok(),
            _ => None,
        }
    }

    /// Boolean flag that is on unless explicitly `false`.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        !matches!(self.0.get(key), Some(Value::Bool(false)))
    }

    /// Overwrites keys present in `patch`; keys absent from `patch` are kept.
    pub fn merge_from(&mut self, patch: &Self) {
        for (key, value) in &patch.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the section has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Built-in typography defaults.
    #[must_use]
    pub fn default_typography() -> Self {
        Self::new()
            .with(keys::FONT_FAMILY, "Inter")
            .with(keys::HEADING_FONT, "Inter")
            .with(keys::FONT_SIZE, 16)
    }

    /// Built-in layout defaults.
    #[must_use]
    pub fn default_layout() -> Self {
        Self::new()
            .with(keys::BORDER_RADIUS, "8px")
            .with(keys::SPACING, "medium")
            .with(keys::CARD_STYLE, "elevated")
    }

    /// Built-in effects defaults.
    #[must_use]
    pub fn default_effects() -> Self {
        Self::new()
            .with(keys::SHADOWS, "subtle")
            .with(keys::ANIMATIONS, "smooth")
            .with(keys::GRADIENTS, true)
            .with(keys::HOVER_EFFECTS, true)
    }
}

/// A fully resolved theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Palette
    pub colors: ColorPalette,
    /// Font settings
    #[serde(default)]
    pub typography: StyleSection,
    /// Layout settings
    #[serde(default)]
    pub layout: StyleSection,
    /// Visual effects
    #[serde(default)]
    pub effects: StyleSection,
    /// Unknown top-level sections, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ThemeConfig {
    /// Creates a config from a palette and the built-in section defaults.
    #[must_use]
    pub fn with_palette(colors: ColorPalette) -> Self {
        Self {
            colors,
            typography: StyleSection::default_typography(),
            layout: StyleSection::default_layout(),
            effects: StyleSection::default_effects(),
            extra: Map::new(),
        }
    }

    /// Body font family.
    #[must_use]
    pub fn font_family(&self) -> Option<&str> {
        self.typography.get_str(keys::FONT_FAMILY)
    }

    /// Heading font family.
    #[must_use]
    pub fn heading_font(&self) -> Option<&str> {
        self.typography.get_str(keys::HEADING_FONT)
    }

    /// Base font size in pixels.
    #[must_use]
    pub fn font_size(&self) -> Option<f64> {
        self.typography.get_number(keys::FONT_SIZE)
    }

    /// Corner radius as written (e.g. `"8px"`).
    #[must_use]
    pub fn border_radius(&self) -> Option<String> {
        match self.layout.get(keys::BORDER_RADIUS)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(format!("{n}px")),
            _ => None,
        }
    }

    /// Spacing token.
    #[must_use]
    pub fn spacing(&self) -> Option<&str> {
        self.layout.get_str(keys::SPACING)
    }

    /// Card style token.
    #[must_use]
    pub fn card_style(&self) -> Option<&str> {
        self.layout.get_str(keys::CARD_STYLE)
    }

    /// Shadow token.
    #[must_use]
    pub fn shadows(&self) -> Option<&str> {
        self.effects.get_str(keys::SHADOWS)
    }

    /// Animation token.
    #[must_use]
    pub fn animations(&self) -> Option<&str> {
        self.effects.get_str(keys::ANIMATIONS)
    }

    /// Gradients flag (on unless explicitly disabled).
    #[must_use]
    pub fn gradients(&self) -> bool {
        self.effects.flag(keys::GRADIENTS)
    }

    /// Hover effects flag (on unless explicitly disabled).
    #[must_use]
    pub fn hover_effects(&self) -> bool {
        self.effects.flag(keys::HOVER_EFFECTS)
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::with_palette(ColorPalette::default())
    }
}

/// Partial palette used in patches. Every role is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalettePatch {
    /// Roles to overwrite
    #[serde(flatten)]
    pub roles: BTreeMap<String, RgbColor>,
}

impl PalettePatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style role assignment.
    pub fn with(mut self, role: PaletteRole, color: RgbColor) -> Self {
        self.roles.insert(role.key().to_string(), color);
        self
    }

    /// A patch that replaces every role of the palette (custom colors too).
    #[must_use]
    pub fn from_palette(palette: &ColorPalette) -> Self {
        let mut patch = Self::new();
        for role in PaletteRole::ALL {
            patch.roles.insert(role.key().to_string(), palette.get(role));
        }
        for (key, color) in &palette.custom {
            patch.roles.insert(key.clone(), *color);
        }
        patch
    }

    /// Writes every present key into `palette`.
    pub fn apply_to(&self, palette: &mut ColorPalette) {
        for (key, color) in &self.roles {
            match PaletteRole::from_key(key) {
                Some(role) => palette.set(role, *color),
                None => {
                    palette.custom.insert(key.clone(), *color);
                }
            }
        }
    }

    /// Returns true if the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

/// A customization patch: any subset of a [`ThemeConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialThemeConfig {
    /// Palette changes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<PalettePatch>,
    /// Typography changes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<StyleSection>,
    /// Layout changes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<StyleSection>,
    /// Effects changes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<StyleSection>,
    /// Unknown sections, passed through
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PartialThemeConfig {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch that only touches colors.
    #[must_use]
    pub fn colors(patch: PalettePatch) -> Self {
        Self {
            colors: Some(patch),
            ..Self::default()
        }
    }

    /// Parses a patch from JSON.
    ///
    /// A color that is not a strict `#RRGGBB` string is reported as
    /// [`Error::InvalidColorFormat`]; any other shape mismatch as
    /// [`Error::InvalidPatch`].
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| Error::InvalidPatch(e.to_string()))?;
        Self::from_value(value)
    }

    /// Converts an already-parsed JSON value into a patch.
    pub fn from_value(value: Value) -> Result<Self> {
        if let Some(colors) = value.get("colors") {
            let colors = colors
                .as_object()
                .ok_or_else(|| Error::InvalidPatch("'colors' must be an object".to_string()))?;
            for (key, color) in colors {
                let text = color.as_str().ok_or_else(|| {
                    Error::InvalidPatch(format!("color '{key}' must be a string"))
                })?;
                RgbColor::from_hex(text)?;
            }
        }
        serde_json::from_value(value).map_err(|e| Error::InvalidPatch(e.to_string()))
    }
}

/// Template category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    /// Clean contemporary storefronts
    Modern,
    /// High-end brands
    Luxury,
    /// Organic, earthy palettes
    Nature,
    /// Sparse layouts
    Minimalist,
    /// Traditional retail
    Classic,
    /// High-contrast, loud designs
    Bold,
}

impl TemplateCategory {
    /// All categories in catalog order.
    pub const ALL: [Self; 6] = [
        Self::Modern,
        Self::Luxury,
        Self::Nature,
        Self::Minimalist,
        Self::Classic,
        Self::Bold,
    ];

    /// Serialized name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Luxury => "luxury",
            Self::Nature => "nature",
            Self::Minimalist => "minimalist",
            Self::Classic => "classic",
            Self::Bold => "bold",
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "Invalid category '{s}'. Must be one of: modern, luxury, nature, minimalist, classic, bold"
                )
            })
    }
}

/// Template difficulty tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Works out of the box
    Beginner,
    /// Some tuning expected
    Intermediate,
    /// Many moving parts
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        })
    }
}

fn default_active() -> bool {
    true
}

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeTemplate {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Localized (Arabic) display name
    pub name_ar: String,
    /// Localized (Arabic) description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_ar: Option<String>,
    /// Category tag
    pub category: TemplateCategory,
    /// Difficulty tag
    pub difficulty_level: Difficulty,
    /// Default palette
    pub color_palette: ColorPalette,
    /// Template defaults for the other sections
    #[serde(default)]
    pub theme_config: PartialThemeConfig,
    /// Premium templates require a paid plan in the storefront
    #[serde(default)]
    pub is_premium: bool,
    /// Inactive templates are hidden from listings
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Higher sorts first
    #[serde(default)]
    pub popularity_score: u32,
}
