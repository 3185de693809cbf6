//! Service layer: template catalog, theme merging and palette analysis.
//!
//! Services compose the pure color math in `color` with the data models.

pub mod analysis;
pub mod catalog;
pub mod merger;

pub use analysis::{analyze, PaletteReport, SaturationLevel, Temperature};
pub use catalog::TemplateCatalog;
pub use merger::{merge, merge_into};
