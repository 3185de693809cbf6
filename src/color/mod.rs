//! Color math: conversions, contrast and harmony generation.
//!
//! Everything here is pure and synchronous.

pub mod contrast;
pub mod harmony;
pub mod space;

pub use contrast::{contrast_ratio, is_accessible, relative_luminance, WCAG_AA_NORMAL_TEXT};
pub use harmony::{generate, generate_from_hex, suggest, HarmonyStrategy, Suggestion};
pub use space::{hex_to_hsl, hex_to_rgb, hsl_to_hex, hsl_to_rgb, rgb_to_hsl};
