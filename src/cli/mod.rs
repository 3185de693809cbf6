//! CLI command handlers for HueForge.
//!
//! This module provides headless, scriptable access to the color engine for
//! automation and for storefront services that shell out to it.

pub mod analyze;
pub mod common;
pub mod config;
pub mod contrast;
pub mod extract;
pub mod generate;
pub mod suggest;
pub mod template;
pub mod theme;

// Re-export types used by main.rs and tests
pub use analyze::AnalyzeArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use contrast::ContrastArgs;
pub use extract::ExtractArgs;
pub use generate::GenerateArgs;
pub use suggest::SuggestArgs;
pub use template::TemplatesArgs;
pub use theme::ThemeArgs;
