//! Section-wise theme merging.
//!
//! Layering, lowest first:
//!
//! 1. Built-in section defaults
//! 2. The template's palette and its `theme_config` defaults
//! 3. Each patch, in order
//!
//! Within a section a present key overwrites, an absent key is preserved and
//! an unknown key passes through. The last patch wins per key; patches are
//! never reconciled beyond that.

use serde_json::Value;
use tracing::debug;

use crate::models::{PartialThemeConfig, ThemeConfig, ThemeTemplate};

/// Builds a theme from a template and a list of customization patches.
///
/// # Examples
///
/// ```
/// use hueforge::models::{PalettePatch, PaletteRole, PartialThemeConfig, RgbColor};
/// use hueforge::services::{merge, TemplateCatalog};
///
/// let catalog = TemplateCatalog::builtin().unwrap();
/// let template = catalog.get("ocean-breeze").unwrap();
/// let red = RgbColor::new(255, 0, 0);
/// let patch = PartialThemeConfig::colors(PalettePatch::new().with(PaletteRole::Primary, red));
///
/// let theme = merge(template, &[patch]);
/// assert_eq!(theme.colors.primary, red);
/// assert_eq!(theme.colors.secondary, template.color_palette.secondary);
/// ```
#[must_use]
pub fn merge(template: &ThemeTemplate, patches: &[PartialThemeConfig]) -> ThemeConfig {
    let mut config = ThemeConfig::with_palette(template.color_palette.clone());
    merge_into(&mut config, &template.theme_config);
    for patch in patches {
        merge_into(&mut config, patch);
    }
    debug!(template = %template.id, patches = patches.len(), "merged theme");
    config
}

/// Applies one patch to an existing theme in place.
pub fn merge_into(config: &mut ThemeConfig, patch: &PartialThemeConfig) {
    if let Some(colors) = &patch.colors {
        colors.apply_to(&mut config.colors);
    }
    if let Some(typography) = &patch.typography {
        config.typography.merge_from(typography);
    }
    if let Some(layout) = &patch.layout {
        config.layout.merge_from(layout);
    }
    if let Some(effects) = &patch.effects {
        config.effects.merge_from(effects);
    }
    for (key, value) in &patch.extra {
        match (config.extra.get_mut(key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                for (k, v) in incoming {
                    existing.insert(k.clone(), v.clone());
                }
            }
            _ => {
                config.extra.insert(key.clone(), value.clone());
            }
        }
    }
}

impl ThemeConfig {
    /// Builds a theme without a template: the default palette and built-in
    /// section defaults with `patch` applied on top.
    #[must_use]
    pub fn from_partial(patch: &PartialThemeConfig) -> Self {
        let mut config = Self::default();
        merge_into(&mut config, patch);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::theme::keys;
    use crate::models::{
        ColorPalette, Difficulty, PalettePatch, PaletteRole, RgbColor, StyleSection,
        TemplateCategory,
    };
    use serde_json::json;

    fn template() -> ThemeTemplate {
        ThemeTemplate {
            id: "test".to_string(),
            name: "Test".to_string(),
            name_ar: "اختبار".to_string(),
            description_ar: None,
            category: TemplateCategory::Modern,
            difficulty_level: Difficulty::Beginner,
            color_palette: ColorPalette::new(
                RgbColor::new(0, 0, 128),
                RgbColor::new(200, 200, 200),
                RgbColor::new(0, 128, 0),
                RgbColor::new(250, 250, 250),
                RgbColor::new(10, 10, 10),
            ),
            theme_config: PartialThemeConfig {
                typography: Some(StyleSection::new().with(keys::FONT_FAMILY, "Cairo")),
                ..PartialThemeConfig::default()
            },
            is_premium: false,
            is_active: true,
            popularity_score: 1,
        }
    }

    fn primary_patch(color: RgbColor) -> PartialThemeConfig {
        PartialThemeConfig::colors(PalettePatch::new().with(PaletteRole::Primary, color))
    }

    #[test]
    fn test_primary_patch_preserves_other_colors() {
        let template = template();
        let red = RgbColor::from_hex("#FF0000").unwrap();
        let theme = merge(&template, &[primary_patch(red)]);

        assert_eq!(theme.colors.primary, red);
        assert_eq!(theme.colors.primary.to_hex(), "#ff0000");
        assert_eq!(theme.colors.secondary, template.color_palette.secondary);
        assert_eq!(theme.colors.dark, template.color_palette.dark);
    }

    #[test]
    fn test_no_patches_gives_template_plus_defaults() {
        let theme = merge(&template(), &[]);
        assert_eq!(theme.font_family(), Some("Cairo"));
        assert_eq!(theme.heading_font(), Some("Inter"));
        assert_eq!(theme.spacing(), Some("medium"));
        assert_eq!(theme.colors, template().color_palette);
    }

    #[test]
    fn test_last_patch_wins_per_key() {
        let first = RgbColor::new(1, 1, 1);
        let second = RgbColor::new(2, 2, 2);
        let theme = merge(&template(), &[primary_patch(first), primary_patch(second)]);
        assert_eq!(theme.colors.primary, second);

        let theme = merge(&template(), &[primary_patch(second), primary_patch(first)]);
        assert_eq!(theme.colors.primary, first);
    }

    #[test]
    fn test_sections_merge_key_by_key() {
        let spacing = PartialThemeConfig {
            layout: Some(StyleSection::new().with(keys::SPACING, "tight")),
            ..PartialThemeConfig::default()
        };
        let radius = PartialThemeConfig {
            layout: Some(StyleSection::new().with(keys::BORDER_RADIUS, "0px").with("grid", 3)),
            ..PartialThemeConfig::default()
        };
        let theme = merge(&template(), &[spacing, radius]);

        assert_eq!(theme.spacing(), Some("tight"));
        assert_eq!(theme.border_radius().as_deref(), Some("0px"));
        assert_eq!(theme.card_style(), Some("elevated"));
        assert_eq!(theme.layout.get("grid"), Some(&json!(3)));
    }

    #[test]
    fn test_unknown_sections_pass_through_and_merge() {
        let first = PartialThemeConfig::from_json(r#"{"seo":{"title":"A","lang":"ar"}}"#).unwrap();
        let second = PartialThemeConfig::from_json(r#"{"seo":{"title":"B"},"flag":true}"#).unwrap();
        let theme = merge(&template(), &[first, second]);

        assert_eq!(theme.extra["seo"], json!({"title": "B", "lang": "ar"}));
        assert_eq!(theme.extra["flag"], json!(true));
    }

    #[test]
    fn test_custom_colors_added() {
        let patch =
            PartialThemeConfig::from_json(r##"{"colors":{"background":"#FAFAFA"}}"##).unwrap();
        let theme = merge(&template(), &[patch]);
        assert_eq!(theme.colors.custom["background"], RgbColor::new(250, 250, 250));
    }

    #[test]
    fn test_template_colors_in_theme_config_override_palette() {
        let mut template = template();
        template.theme_config.colors =
            Some(PalettePatch::new().with(PaletteRole::Accent, RgbColor::new(9, 9, 9)));
        let theme = merge(&template, &[]);
        assert_eq!(theme.colors.accent, RgbColor::new(9, 9, 9));
    }

    #[test]
    fn test_merge_into_live_edit() {
        let mut theme = merge(&template(), &[]);
        let effects = PartialThemeConfig {
            effects: Some(StyleSection::new().with(keys::GRADIENTS, false)),
            ..PartialThemeConfig::default()
        };
        merge_into(&mut theme, &effects);
        assert!(!theme.gradients());
        assert!(theme.hover_effects());
    }

    #[test]
    fn test_from_partial_uses_default_palette() {
        let theme = ThemeConfig::from_partial(&primary_patch(RgbColor::new(255, 0, 0)));
        assert_eq!(theme.colors.primary, RgbColor::new(255, 0, 0));
        assert_eq!(theme.colors.secondary, ColorPalette::DEFAULT_SECONDARY);
        assert_eq!(theme.font_family(), Some("Inter"));
    }
}
