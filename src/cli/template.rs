//! Template catalog commands.

use crate::cli::common::{load_config_or_default, print_json, CliError, CliResult};
use crate::models::{TemplateCategory, ThemeTemplate};
use crate::services::TemplateCatalog;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Template catalog commands
#[derive(Args, Debug)]
pub struct TemplatesArgs {
    #[command(subcommand)]
    command: TemplatesCommand,
}

#[derive(Subcommand, Debug)]
enum TemplatesCommand {
    /// List active templates, most popular first
    List(TemplatesListArgs),
}

/// List active templates, most popular first
#[derive(Args, Debug)]
pub struct TemplatesListArgs {
    /// Only templates in this category
    /// (modern, luxury, nature, minimalist, classic, bold)
    #[arg(long, value_name = "CATEGORY")]
    category: Option<String>,

    /// Template catalog file (defaults to paths.templates, then the
    /// embedded catalog)
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl TemplatesArgs {
    /// Execute templates subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            TemplatesCommand::List(args) => args.execute(),
        }
    }
}

impl TemplatesListArgs {
    /// Execute list command
    pub fn execute(&self) -> CliResult<()> {
        let category = self
            .category
            .as_deref()
            .map(str::parse::<TemplateCategory>)
            .transpose()
            .map_err(CliError::validation)?;

        let catalog_path = self
            .catalog
            .clone()
            .or_else(|| load_config_or_default().paths.templates);
        let catalog = TemplateCatalog::load_or_builtin(catalog_path.as_deref())
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        let templates = catalog.list(category);
        if self.json {
            return print_json(&templates);
        }

        if templates.is_empty() {
            println!("No templates found.");
            return Ok(());
        }
        print_table(&templates);
        Ok(())
    }
}

fn print_table(templates: &[&ThemeTemplate]) {
    println!(
        "{:<20} {:<20} {:<11} {:<13} {:>10}",
        "ID", "NAME", "CATEGORY", "DIFFICULTY", "POPULARITY"
    );
    for template in templates {
        println!(
            "{:<20} {:<20} {:<11} {:<13} {:>10}{}",
            template.id,
            template.name,
            template.category,
            template.difficulty_level,
            template.popularity_score,
            if template.is_premium { "  premium" } else { "" }
        );
    }
}
