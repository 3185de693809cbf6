//! Contrast command: WCAG ratio between two colors.

use crate::cli::common::{parse_color, print_json, CliResult};
use crate::color::{contrast_ratio, is_accessible, WCAG_AA_NORMAL_TEXT};
use clap::Args;
use serde::Serialize;

/// Compute the WCAG contrast ratio between two colors
#[derive(Debug, Clone, Args)]
pub struct ContrastArgs {
    /// First color (#RRGGBB)
    #[arg(value_name = "A")]
    pub first: String,

    /// Second color (#RRGGBB)
    #[arg(value_name = "B")]
    pub second: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct ContrastOutput {
    first: String,
    second: String,
    ratio: f64,
    accessible: bool,
    threshold: f64,
}

impl ContrastArgs {
    /// Execute the contrast command
    pub fn execute(&self) -> CliResult<()> {
        let first = parse_color(&self.first)?;
        let second = parse_color(&self.second)?;
        let ratio = contrast_ratio(first, second);
        let accessible = is_accessible(ratio);

        if self.json {
            return print_json(&ContrastOutput {
                first: first.to_hex(),
                second: second.to_hex(),
                ratio,
                accessible,
                threshold: WCAG_AA_NORMAL_TEXT,
            });
        }

        println!("{first} on {second}: {ratio:.2}:1");
        println!(
            "WCAG AA (normal text, {WCAG_AA_NORMAL_TEXT}:1): {}",
            if accessible { "pass" } else { "fail" }
        );
        Ok(())
    }
}
