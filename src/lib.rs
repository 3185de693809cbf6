//! HueForge library
//!
//! Color-science and theme-generation engine for storefront themes: it turns
//! a seed color or an image into a harmonious, contrast-checked palette,
//! merges palettes into full theme configurations, and reports diagnostics.
//!
//! The core (`color`, `extract`, `models`, `services`, `export`) is pure and
//! synchronous. The `cli` module is the command-line surface used by the
//! `hueforge` binary.

// Module declarations
pub mod cli;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod extract;
pub mod models;
pub mod services;

pub use error::{Error, Result};
