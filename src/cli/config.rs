//! Configuration management CLI commands.

use crate::cli::common::{load_config_or_default, print_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set a configuration value
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set a configuration value
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Key: generation.harmony, extraction.sample_stride or paths.templates
    #[arg(value_name = "KEY")]
    key: String,

    /// New value (empty string clears paths.templates)
    #[arg(value_name = "VALUE")]
    value: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&config)
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        let mut config = load_config_or_default();

        config
            .set_value(&self.key, &self.value)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let title = format!("{APP_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    if let Ok(path) = Config::config_file_path() {
        println!("File: {}", path.display());
    }
    println!();

    println!("Generation:");
    println!("  Harmony: {}", config.generation.harmony);
    println!();

    println!("Extraction:");
    println!("  Sample Stride: {}", config.extraction.sample_stride);
    println!();

    println!("Paths:");
    match &config.paths.templates {
        Some(path) => println!("  Templates: {}", path.display()),
        None => println!("  Templates: (embedded catalog)"),
    }
}
