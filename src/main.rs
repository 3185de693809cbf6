//! HueForge - color palette and theme generation from the command line
//!
//! Generates harmony palettes from a seed color, extracts palettes from
//! images, checks WCAG contrast and merges storefront theme templates.

use clap::{Parser, Subcommand};
use hueforge::cli::{
    AnalyzeArgs, CliResult, ConfigArgs, ContrastArgs, ExtractArgs, GenerateArgs, SuggestArgs,
    TemplatesArgs, ThemeArgs,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// HueForge - color palette and theme generation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging (stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a palette from a seed color
    Generate(GenerateArgs),
    /// Suggest palettes for every harmony strategy
    Suggest(SuggestArgs),
    /// Extract a palette from an image file
    Extract(ExtractArgs),
    /// Analyze a palette
    Analyze(AnalyzeArgs),
    /// Compute the contrast ratio between two colors
    Contrast(ContrastArgs),
    /// Build themes from templates and patches
    Theme(ThemeArgs),
    /// Browse the template catalog
    Templates(TemplatesArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Generate(args) => args.execute(),
            Self::Suggest(args) => args.execute(),
            Self::Extract(args) => args.execute(),
            Self::Analyze(args) => args.execute(),
            Self::Contrast(args) => args.execute(),
            Self::Theme(args) => args.execute(),
            Self::Templates(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
