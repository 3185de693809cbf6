//! Export functionality for palettes and themes.
//!
//! Renders palettes as text or JSON and themes as CSS custom properties.

pub mod css_vars;
pub mod palette_text;

pub use css_vars::{css_variables, render_css, shadow_value, spacing_value, CssMode};
pub use palette_text::render_palette_text;
