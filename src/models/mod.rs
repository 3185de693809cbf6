//! Data models for colors, palettes, themes and templates.
//!
//! Models carry no I/O; loading and rendering live in `services` and
//! `export`.

pub mod color_palette;
pub mod hsl;
pub mod rgb;
pub mod theme;

pub use color_palette::{ColorPalette, PaletteRole};
pub use hsl::Hsl;
pub use rgb::RgbColor;
pub use theme::{
    Difficulty, PalettePatch, PartialThemeConfig, StyleSection, TemplateCategory, ThemeConfig,
    ThemeTemplate,
};
