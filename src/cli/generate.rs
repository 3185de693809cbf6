//! Generate command: seed color to harmony palette.

use crate::cli::common::{load_config_or_default, parse_color, print_json, CliResult};
use crate::color::{generate, HarmonyStrategy};
use crate::export::{render_css, render_palette_text, CssMode};
use crate::models::ThemeConfig;
use clap::Args;

/// Generate a palette from a seed color
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Seed color (#RRGGBB)
    #[arg(value_name = "SEED")]
    pub seed: String,

    /// Harmony strategy: complementary, analogous, triadic or monochromatic
    /// (defaults to generation.harmony from the config)
    #[arg(long, value_name = "STRATEGY")]
    pub harmony: Option<String>,

    /// Output as JSON
    #[arg(long, conflicts_with = "css")]
    pub json: bool,

    /// Output as CSS custom properties
    #[arg(long)]
    pub css: bool,
}

/// Resolves the strategy from an explicit argument or the config default.
pub(crate) fn resolve_harmony(arg: Option<&str>) -> CliResult<HarmonyStrategy> {
    match arg {
        Some(name) => Ok(name.parse()?),
        None => Ok(load_config_or_default().generation.harmony),
    }
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let seed = parse_color(&self.seed)?;
        let strategy = resolve_harmony(self.harmony.as_deref())?;
        let palette = generate(seed, strategy);

        if self.json {
            print_json(&palette)?;
        } else if self.css {
            print!("{}", render_css(&ThemeConfig::with_palette(palette), CssMode::Document));
        } else {
            print!("{}", render_palette_text(&palette));
        }

        Ok(())
    }
}
