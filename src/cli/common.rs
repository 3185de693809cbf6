//! Shared CLI plumbing: error type, exit codes and output helpers.

use serde::Serialize;
use std::fmt;
use std::path::Path;
use tracing::warn;

use crate::config::Config;
use crate::models::RgbColor;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input: color, patch, option value
    Validation = 1,
    /// Unreadable or unwritable file, undecodable image
    Io = 2,
}

impl ExitCode {
    /// Numeric code for `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// An error reported by a CLI handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to terminate with
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// A validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// An I/O failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Io,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<crate::Error> for CliError {
    fn from(err: crate::Error) -> Self {
        if err.is_validation() {
            Self::validation(err.to_string())
        } else {
            Self::io(err.to_string())
        }
    }
}

/// Result type for CLI handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Parses a color argument strictly.
pub fn parse_color(value: &str) -> CliResult<RgbColor> {
    RgbColor::from_hex(value).map_err(CliError::from)
}

/// Reads a UTF-8 file, mapping failures to an I/O error.
pub fn read_text(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("Failed to read {}: {e}", path.display())))
}

/// Loads the user configuration, falling back to defaults with a warning
/// when the file is unreadable or invalid.
pub fn load_config_or_default() -> Config {
    Config::load().unwrap_or_else(|e| {
        warn!("Ignoring configuration: {e:#}");
        Config::default()
    })
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
