//! Plain-text palette export.

use std::fmt::Write as _;

use crate::models::ColorPalette;

/// Renders a palette as `key: #rrggbb` lines, roles first, then custom
/// colors.
#[must_use]
pub fn render_palette_text(palette: &ColorPalette) -> String {
    let mut output = String::new();
    for (name, color) in palette.entries() {
        let _ = writeln!(output, "{name}: {color}");
    }
    output
}
