//! Extract command: image file to palette.

use crate::cli::common::{load_config_or_default, CliError, CliResult};
use crate::extract::ExtractorOptions;
use clap::Args;
use std::path::PathBuf;

/// Extract a palette from an image file
#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    /// Image file (PNG, JPEG, GIF, BMP or WebP)
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Sample every n-th pixel (defaults to extraction.sample_stride)
    #[arg(long, value_name = "N")]
    pub stride: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ExtractArgs {
    fn options(&self) -> CliResult<ExtractorOptions> {
        match self.stride {
            Some(stride) => ExtractorOptions::with_stride(stride)
                .ok_or_else(|| CliError::validation("--stride must be at least 1")),
            None => load_config_or_default()
                .extraction
                .options()
                .map_err(|e| CliError::validation(format!("{e:#}"))),
        }
    }

    /// Execute the extract command
    #[cfg(feature = "image")]
    pub fn execute(&self) -> CliResult<()> {
        use crate::cli::common::print_json;
        use crate::export::render_palette_text;
        use crate::extract::{extract_from_bytes, ImageCrateDecoder};

        let options = self.options()?;
        let bytes = std::fs::read(&self.image).map_err(|e| {
            CliError::io(format!("Failed to read image {}: {e}", self.image.display()))
        })?;
        tracing::debug!(path = %self.image.display(), bytes = bytes.len(), "read image");

        let palette = extract_from_bytes(&ImageCrateDecoder, &bytes, options)?;

        if self.json {
            print_json(&palette)?;
        } else {
            print!("{}", render_palette_text(&palette));
        }
        Ok(())
    }

    /// Execute the extract command
    #[cfg(not(feature = "image"))]
    pub fn execute(&self) -> CliResult<()> {
        self.options()?;
        Err(CliError::validation(format!(
            "Cannot read {}: this build has no image support (enable the `image` feature)",
            self.image.display()
        )))
    }
}
