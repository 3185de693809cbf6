//! Read-only theme template catalog.
//!
//! A default catalog is embedded in the binary; a catalog file with the same
//! JSON shape (an array of templates) can replace it.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use crate::models::{TemplateCategory, ThemeTemplate};

const BUILTIN_TEMPLATES: &str = include_str!("../data/theme_templates.json");

/// A list of templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: Vec<ThemeTemplate>,
}

impl TemplateCatalog {
    /// Wraps an existing template list.
    #[must_use]
    pub const fn new(templates: Vec<ThemeTemplate>) -> Self {
        Self { templates }
    }

    /// Parses the embedded catalog.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_TEMPLATES).context("Embedded template catalog is invalid")
    }

    /// Parses a catalog from a JSON array.
    pub fn from_json(json: &str) -> Result<Self> {
        let templates: Vec<ThemeTemplate> =
            serde_json::from_str(json).context("Failed to parse template catalog")?;
        Ok(Self::new(templates))
    }

    /// Loads a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read template catalog: {}", path.display()))?;
        let catalog = Self::from_json(&content)
            .with_context(|| format!("Invalid template catalog: {}", path.display()))?;
        debug!(path = %path.display(), count = catalog.templates.len(), "loaded template catalog");
        Ok(catalog)
    }

    /// Loads `path` if given, otherwise the embedded catalog.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(Self::builtin, Self::load)
    }

    /// Active templates, optionally filtered by category, most popular
    /// first. Equal scores keep catalog order.
    #[must_use]
    pub fn list(&self, category: Option<TemplateCategory>) -> Vec<&ThemeTemplate> {
        let mut templates: Vec<&ThemeTemplate> = self
            .templates
            .iter()
            .filter(|t| t.is_active)
            .filter(|t| category.is_none_or(|c| t.category == c))
            .collect();
        templates.sort_by(|a, b| b.popularity_score.cmp(&a.popularity_score));
        templates
    }

    /// Looks up a template by id, active or not.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ThemeTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Total number of templates, inactive included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns true if the catalog has no templates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = TemplateCatalog::builtin().unwrap();
        assert!(catalog.len() >= 6);
        assert!(catalog.get("ocean-breeze").is_some());
    }

    #[test]
    fn test_list_skips_inactive_and_sorts_by_popularity() {
        let catalog = TemplateCatalog::builtin().unwrap();
        let listed = catalog.list(None);

        assert!(listed.iter().all(|t| t.is_active));
        assert!(listed.iter().all(|t| t.id != "sunset-retired"));
        let scores: Vec<u32> = listed.iter().map(|t| t.popularity_score).collect();
        let mut sorted = scores.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(scores, sorted);
    }

    #[test]
    fn test_list_by_category() {
        let catalog = TemplateCatalog::builtin().unwrap();
        let luxury = catalog.list(Some(TemplateCategory::Luxury));
        assert!(!luxury.is_empty());
        assert!(luxury.iter().all(|t| t.category == TemplateCategory::Luxury));
    }

    #[test]
    fn test_get_finds_inactive() {
        let catalog = TemplateCatalog::builtin().unwrap();
        assert!(!catalog.get("sunset-retired").unwrap().is_active);
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("templates.json");
        fs::write(
            &path,
            r##"[{"id":"x","name":"X","name_ar":"اكس","category":"bold","difficulty_level":"advanced",
                "color_palette":{"primary":"#000000","secondary":"#111111","accent":"#222222","neutral":"#ffffff","dark":"#010101"}}]"##,
        )
        .unwrap();

        let catalog = TemplateCatalog::load_or_builtin(Some(&path)).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.list(None)[0].id, "x");
    }

    #[test]
    fn test_load_rejects_bad_palette() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("templates.json");
        fs::write(
            &path,
            r##"[{"id":"x","name":"X","name_ar":"x","category":"bold","difficulty_level":"advanced",
                "color_palette":{"primary":"#000"}}]"##,
        )
        .unwrap();

        let err = TemplateCatalog::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid template catalog"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = TemplateCatalog::load(Path::new("/nonexistent/templates.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read template catalog"));
    }
}
