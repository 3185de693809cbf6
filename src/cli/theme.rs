//! Theme commands: merge a template with customization patches.

use crate::cli::common::{
    load_config_or_default, parse_color, print_json, read_text, CliError, CliResult,
};
use crate::cli::generate::resolve_harmony;
use crate::color::generate;
use crate::constants::APP_BINARY_NAME;
use crate::export::{render_css, CssMode};
use crate::models::{PalettePatch, PartialThemeConfig, ThemeConfig};
use crate::services::{merge, merge_into, TemplateCatalog};
use clap::{Args, Subcommand};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Theme commands
#[derive(Args, Debug)]
pub struct ThemeArgs {
    #[command(subcommand)]
    command: ThemeCommand,
}

#[derive(Subcommand, Debug)]
enum ThemeCommand {
    /// Merge a template with patches and print the resulting theme
    Apply(ThemeApplyArgs),
}

/// Merge a template with patches and print the resulting theme
#[derive(Args, Debug)]
pub struct ThemeApplyArgs {
    /// Template id (omit to start from the default palette)
    #[arg(long, value_name = "ID")]
    template: Option<String>,

    /// Patch JSON file, applied in order (repeatable)
    #[arg(long = "patch", value_name = "FILE")]
    patches: Vec<PathBuf>,

    /// Replace the palette with one generated from this seed color
    #[arg(long, value_name = "HEX")]
    seed: Option<String>,

    /// Harmony strategy used with --seed
    #[arg(long, value_name = "STRATEGY", requires = "seed")]
    harmony: Option<String>,

    /// Template catalog file (defaults to paths.templates, then the
    /// embedded catalog)
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Output CSS custom properties instead of JSON
    #[arg(long, conflicts_with = "preview_css")]
    css: bool,

    /// Output live-preview CSS custom properties instead of JSON
    #[arg(long)]
    preview_css: bool,
}

impl ThemeArgs {
    /// Execute theme subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ThemeCommand::Apply(args) => args.execute(),
        }
    }
}

impl ThemeApplyArgs {
    fn collect_patches(&self) -> CliResult<Vec<PartialThemeConfig>> {
        let mut patches = Vec::new();

        if let Some(seed) = &self.seed {
            let strategy = resolve_harmony(self.harmony.as_deref())?;
            let palette = generate(parse_color(seed)?, strategy);
            patches.push(PartialThemeConfig::colors(PalettePatch::from_palette(&palette)));
        }

        for path in &self.patches {
            let patch = PartialThemeConfig::from_json(&read_text(path)?).map_err(|e| {
                CliError::validation(format!("Invalid patch {}: {e}", path.display()))
            })?;
            debug!(path = %path.display(), "loaded patch");
            patches.push(patch);
        }

        Ok(patches)
    }

    fn build(&self) -> CliResult<ThemeConfig> {
        let patches = self.collect_patches()?;

        let Some(id) = &self.template else {
            let mut config = ThemeConfig::default();
            for patch in &patches {
                merge_into(&mut config, patch);
            }
            return Ok(config);
        };

        let catalog_path = self
            .catalog
            .clone()
            .or_else(|| load_config_or_default().paths.templates);
        let catalog = TemplateCatalog::load_or_builtin(catalog_path.as_deref())
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        let template = catalog.get(id).ok_or_else(|| {
            warn!(template = %id, "unknown template");
            let hint = format!("{APP_BINARY_NAME} templates list");
            CliError::validation(format!(
                "Unknown template '{id}'. Run `{hint}` to see available templates"
            ))
        })?;
        if !template.is_active {
            warn!(template = %id, "template is inactive");
        }

        Ok(merge(template, &patches))
    }

    /// Execute apply command
    pub fn execute(&self) -> CliResult<()> {
        let config = self.build()?;

        if self.css {
            print!("{}", render_css(&config, CssMode::Document));
        } else if self.preview_css {
            print!("{}", render_css(&config, CssMode::Preview));
        } else {
            print_json(&config)?;
        }
        Ok(())
    }
}
