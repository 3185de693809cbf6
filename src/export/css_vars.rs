//! CSS custom property export for themes.
//!
//! Two flavours:
//! - document variables (`--primary`, `--font-family`, ...) applied to `:root`
//! - preview variables (`--preview-primary`, `--preview-font`, ...) consumed
//!   by the live preview surface, with spacing and shadow tokens expanded
//!   into concrete CSS values

use std::fmt::Write as _;

use crate::models::ThemeConfig;

/// Which variable set to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CssMode {
    /// Site-wide variables on `:root`
    #[default]
    Document,
    /// `--preview-*` variables for the live preview
    Preview,
}

impl CssMode {
    const fn selector(self) -> &'static str {
        match self {
            Self::Document => ":root",
            Self::Preview => "[data-theme-preview]",
        }
    }
}

/// Expands a spacing token into a CSS length. Unknown tokens fall back to
/// `1rem`.
#[must_use]
pub fn spacing_value(token: &str) -> &'static str {
    match token {
        "tight" => "0.5rem",
        "comfortable" => "1.5rem",
        "spacious" => "2rem",
        _ => "1rem",
    }
}

/// Expands a shadow token into a `box-shadow` value. Unknown tokens fall
/// back to the subtle shadow.
#[must_use]
pub fn shadow_value(token: &str) -> &'static str {
    match token {
        "none" => "none",
        "medium" => "0 4px 6px -1px rgb(0 0 0 / 0.1)",
        "strong" => "0 10px 15px -3px rgb(0 0 0 / 0.1)",
        "elegant" => "0 20px 25px -5px rgb(0 0 0 / 0.1)",
        _ => "0 1px 3px 0 rgb(0 0 0 / 0.1)",
    }
}

/// Lists the variables for `config` as `(name, value)` pairs, in output
/// order. Keys missing from the theme are skipped.
#[must_use]
pub fn css_variables(config: &ThemeConfig, mode: CssMode) -> Vec<(String, String)> {
    let mut vars = Vec::new();
    let prefix = match mode {
        CssMode::Document => "--",
        CssMode::Preview => "--preview-",
    };

    for (name, color) in config.colors.entries() {
        vars.push((format!("{prefix}{name}"), color.to_hex()));
    }

    match mode {
        CssMode::Document => {
            if let Some(font) = config.font_family() {
                vars.push(("--font-family".to_string(), font.to_string()));
            }
            if let Some(font) = config.heading_font() {
                vars.push(("--heading-font".to_string(), font.to_string()));
            }
            if let Some(radius) = config.border_radius() {
                vars.push(("--radius".to_string(), radius));
            }
            if let Some(spacing) = config.spacing() {
                vars.push(("--spacing".to_string(), spacing.to_string()));
            }
            if let Some(shadows) = config.shadows() {
                vars.push(("--shadow-level".to_string(), shadows.to_string()));
            }
        }
        CssMode::Preview => {
            if let Some(font) = config.font_family() {
                vars.push(("--preview-font".to_string(), font.to_string()));
            }
            if let Some(size) = config.font_size() {
                vars.push(("--preview-font-size".to_string(), format!("{size}px")));
            }
            if let Some(radius) = config.border_radius() {
                vars.push(("--preview-radius".to_string(), radius));
            }
            if let Some(spacing) = config.spacing() {
                vars.push(("--preview-spacing".to_string(), spacing_value(spacing).to_string()));
            }
            if let Some(shadows) = config.shadows() {
                vars.push(("--preview-shadow".to_string(), shadow_value(shadows).to_string()));
            }
        }
    }

    vars
}

/// Renders a CSS rule block with every variable.
#[must_use]
pub fn render_css(config: &ThemeConfig, mode: CssMode) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{} {{", mode.selector());
    for (name, value) in css_variables(config, mode) {
        let _ = writeln!(output, "  {name}: {value};");
    }
    output.push_str("}\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::theme::keys;
    use crate::models::StyleSection;

    fn lookup<'a>(vars: &'a [(String, String)], name: &str) -> Option<&'a str> {
        vars.iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_document_variables() {
        let vars = css_variables(&ThemeConfig::default(), CssMode::Document);
        assert_eq!(lookup(&vars, "--primary"), Some("#0066ff"));
        assert_eq!(lookup(&vars, "--success"), Some("#22c55e"));
        assert_eq!(lookup(&vars, "--font-family"), Some("Inter"));
        assert_eq!(lookup(&vars, "--heading-font"), Some("Inter"));
        assert_eq!(lookup(&vars, "--radius"), Some("8px"));
        assert_eq!(lookup(&vars, "--spacing"), Some("medium"));
        assert_eq!(lookup(&vars, "--shadow-level"), Some("subtle"));
        assert_eq!(vars[0].0, "--primary");
    }

    #[test]
    fn test_preview_variables_expand_tokens() {
        let mut config = ThemeConfig::default();
        config.layout.merge_from(&StyleSection::new().with(keys::SPACING, "spacious"));
        config.effects.merge_from(&StyleSection::new().with(keys::SHADOWS, "elegant"));

        let vars = css_variables(&config, CssMode::Preview);
        assert_eq!(lookup(&vars, "--preview-primary"), Some("#0066ff"));
        assert_eq!(lookup(&vars, "--preview-font"), Some("Inter"));
        assert_eq!(lookup(&vars, "--preview-font-size"), Some("16px"));
        assert_eq!(lookup(&vars, "--preview-radius"), Some("8px"));
        assert_eq!(lookup(&vars, "--preview-spacing"), Some("2rem"));
        assert_eq!(
            lookup(&vars, "--preview-shadow"),
            Some("0 20px 25px -5px rgb(0 0 0 / 0.1)")
        );
        assert!(lookup(&vars, "--font-family").is_none());
    }

    #[test]
    fn test_missing_keys_are_skipped() {
        let mut config = ThemeConfig::default();
        config.typography = StyleSection::new();
        let vars = css_variables(&config, CssMode::Document);
        assert!(lookup(&vars, "--font-family").is_none());
        assert!(lookup(&vars, "--radius").is_some());
    }

    #[test]
    fn test_token_fallbacks() {
        assert_eq!(spacing_value("tight"), "0.5rem");
        assert_eq!(spacing_value("medium"), "1rem");
        assert_eq!(spacing_value("huge"), "1rem");
        assert_eq!(shadow_value("none"), "none");
        assert_eq!(shadow_value("strong"), "0 10px 15px -3px rgb(0 0 0 / 0.1)");
        assert_eq!(shadow_value("glow"), "0 1px 3px 0 rgb(0 0 0 / 0.1)");
    }

    #[test]
    fn test_render_css_block() {
        let css = render_css(&ThemeConfig::default(), CssMode::Document);
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --primary: #0066ff;\n"));
        assert!(css.ends_with("}\n"));

        let preview = render_css(&ThemeConfig::default(), CssMode::Preview);
        assert!(preview.starts_with("[data-theme-preview] {\n"));
        assert!(preview.contains("  --preview-spacing: 1rem;\n"));
    }
}
