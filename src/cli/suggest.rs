//! Suggest command: one palette per harmony strategy.

use crate::cli::common::{parse_color, print_json, CliResult};
use crate::color::suggest;
use crate::export::render_palette_text;
use clap::Args;

/// Suggest palettes for every harmony strategy
#[derive(Debug, Clone, Args)]
pub struct SuggestArgs {
    /// Seed color (#RRGGBB)
    #[arg(value_name = "SEED")]
    pub seed: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl SuggestArgs {
    /// Execute the suggest command
    pub fn execute(&self) -> CliResult<()> {
        let seed = parse_color(&self.seed)?;
        let suggestions = suggest(seed);

        if self.json {
            return print_json(&suggestions);
        }

        for (i, suggestion) in suggestions.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("{} ({})", suggestion.label, suggestion.strategy);
            for line in render_palette_text(&suggestion.palette).lines() {
                println!("  {line}");
            }
        }
        Ok(())
    }
}
