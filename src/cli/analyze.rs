//! Analyze command: palette diagnostics.

use crate::cli::common::{parse_color, print_json, read_text, CliResult};
use crate::cli::generate::resolve_harmony;
use crate::color::{generate, WCAG_AA_NORMAL_TEXT};
use crate::models::ColorPalette;
use crate::services::{analyze, PaletteReport};
use clap::{ArgGroup, Args};
use std::path::PathBuf;

/// Analyze a palette for accessibility, temperature and saturation
#[derive(Debug, Clone, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["palette", "seed"])))]
pub struct AnalyzeArgs {
    /// Palette JSON file (object of role -> #RRGGBB)
    #[arg(long, value_name = "FILE")]
    pub palette: Option<PathBuf>,

    /// Generate the palette from this seed color instead
    #[arg(long, value_name = "HEX")]
    pub seed: Option<String>,

    /// Harmony strategy used with --seed
    #[arg(long, value_name = "STRATEGY", requires = "seed")]
    pub harmony: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl AnalyzeArgs {
    fn palette(&self) -> CliResult<ColorPalette> {
        if let Some(path) = &self.palette {
            return Ok(ColorPalette::from_json(&read_text(path)?)?);
        }
        let seed = parse_color(self.seed.as_deref().unwrap_or_default())?;
        let strategy = resolve_harmony(self.harmony.as_deref())?;
        Ok(generate(seed, strategy))
    }

    /// Execute the analyze command
    pub fn execute(&self) -> CliResult<()> {
        let report = analyze(&self.palette()?);

        if self.json {
            print_json(&report)?;
        } else {
            print_report(&report);
        }
        Ok(())
    }
}

fn print_report(report: &PaletteReport) {
    println!(
        "Contrast (primary on neutral): {:.2}:1 ({})",
        report.contrast_ratio,
        if report.accessible {
            "meets WCAG AA"
        } else {
            "below WCAG AA"
        }
    );
    if !report.accessible {
        println!("  Needs at least {WCAG_AA_NORMAL_TEXT}:1 for normal text");
    }
    println!("Temperature: {}", report.temperature);
    println!("Saturation: {}", report.saturation);
    println!();
    println!("Recommendations:");
    for recommendation in &report.recommendations {
        println!("  - {recommendation}");
    }
}
