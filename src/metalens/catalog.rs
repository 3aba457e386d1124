//! The canonical-name catalog.
//!
//! Each metadata property is addressed by a canonical name (`System.Title`,
//! `System.Photo.DateTaken`, ...). The full set of known names is produced
//! offline and persisted as a flat JSON list; a copy of that list is embedded
//! into the binary so the tool works with no files installed. A user-supplied
//! catalog file can replace the embedded one.
//!
//! The catalog is loaded once at startup and is read-only afterwards.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::Result;
use crate::model::PropertyName;

const BUILTIN_CATALOG: &str = include_str!("canonical_names.json");

static BUILTIN: Lazy<PropertyCatalog> = Lazy::new(|| {
    // The embedded asset is produced by the same serializer `load` reads,
    // so a parse failure here is a build defect, not a runtime condition.
    PropertyCatalog::parse(BUILTIN_CATALOG).expect("embedded catalog is malformed")
});

/// Persisted catalog document shape.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    canonical_names: Vec<String>,
}

/// An ordered, duplicate-free collection of canonical property names.
#[derive(Debug, Clone)]
pub struct PropertyCatalog {
    names: Vec<PropertyName>,
}

impl PropertyCatalog {
    /// Build a catalog from raw name strings.
    ///
    /// Malformed entries (empty, fewer than two segments) are dropped, and
    /// duplicates keep their first occurrence. Input order is preserved.
    pub fn from_names<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let names = raw
            .into_iter()
            .filter_map(|s| PropertyName::new(s))
            .filter(|name| seen.insert(name.clone()))
            .collect();
        Self { names }
    }

    /// Load a catalog from a JSON file of the persisted shape.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Ok(Self::from_names(file.canonical_names))
    }

    /// The catalog embedded into the binary at build time.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    pub fn names(&self) -> impl Iterator<Item = &PropertyName> {
        self.names.iter()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = PropertyCatalog::builtin();
        assert!(catalog.len() > 50);
        assert!(catalog
            .names()
            .any(|n| n.as_str() == "System.Title"));
        assert!(catalog
            .names()
            .any(|n| n.as_str() == "System.Image.HorizontalSize"));
    }

    #[test]
    fn test_from_names_drops_malformed() {
        let catalog =
            PropertyCatalog::from_names(["System.Title", "", "System", "System..Broken"]);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_from_names_dedupes_keeping_first() {
        let catalog =
            PropertyCatalog::from_names(["System.Title", "System.Author", "System.Title"]);
        let names: Vec<&str> = catalog.names().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["System.Title", "System.Author"]);
    }

    #[test]
    fn test_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"{"canonical_names": ["System.Author", "System.Photo.FNumber"]}"#,
        )
        .unwrap();

        let catalog = PropertyCatalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, "not json").unwrap();

        assert!(PropertyCatalog::load(&path).is_err());
    }
}
