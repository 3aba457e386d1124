//! # API Facade
//!
//! The API layer is a **thin facade** over the report pipeline. It owns the
//! catalog and the provider for the lifetime of the process and is the single
//! entry point for every UI.
//!
//! It does no I/O of its own and returns structured types only; printing and
//! exit codes are the binary's problem.

use std::path::Path;

use crate::catalog::PropertyCatalog;
use crate::error::Result;
use crate::provider::fs::{FsObject, FsProvider};
use crate::provider::MetadataProvider;
use crate::report::{self, Report};

/// The main facade for metadata inspections.
///
/// Generic over [`MetadataProvider`] to allow different backends:
/// `MetalensApi<FsProvider>` in production, `MetalensApi<InMemoryProvider>`
/// in tests.
pub struct MetalensApi<P: MetadataProvider> {
    provider: P,
    catalog: PropertyCatalog,
}

impl<P: MetadataProvider> MetalensApi<P> {
    pub fn new(provider: P, catalog: PropertyCatalog) -> Self {
        Self { provider, catalog }
    }

    pub fn catalog(&self) -> &PropertyCatalog {
        &self.catalog
    }

    /// Run collect → order → format for one object handle.
    ///
    /// Never fails: per-property faults become absences or fallback text
    /// inside the pipeline.
    pub fn inspect(&self, handle: &P::Handle) -> Report {
        report::build(&self.provider, handle, &self.catalog)
    }
}

impl MetalensApi<FsProvider> {
    /// Resolve a filesystem path and inspect it. The only failure mode is
    /// the handle resolution itself.
    pub fn inspect_path<A: AsRef<Path>>(&self, path: A) -> Result<Report> {
        let handle = FsObject::from_path(path)?;
        Ok(self.inspect(&handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PropertyValue;
    use crate::provider::memory::InMemoryProvider;

    #[test]
    fn test_inspect_dispatches_through_pipeline() {
        let provider = InMemoryProvider::new().with_property(
            "doc",
            "System.Title",
            PropertyValue::Text("T".into()),
        );
        let catalog = PropertyCatalog::from_names(["System.Title", "System.Author"]);
        let api = MetalensApi::new(provider, catalog);

        let report = api.inspect(&"doc".to_string());
        assert_eq!(report.count(), 1);
        assert_eq!(report.entries[0].name.as_str(), "System.Title");
    }

    #[test]
    fn test_inspect_path_fails_for_missing_object() {
        let dir = tempfile::tempdir().unwrap();
        let api = MetalensApi::new(FsProvider::new(), PropertyCatalog::builtin().clone());

        assert!(api.inspect_path(dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_inspect_path_reports_real_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("report.txt");
        std::fs::write(&file, "contents").unwrap();

        let api = MetalensApi::new(FsProvider::new(), PropertyCatalog::builtin().clone());
        let report = api.inspect_path(&file).unwrap();

        assert!(report.count() > 0);
        assert!(report
            .entries
            .iter()
            .any(|e| e.name.as_str() == "System.FileName" && e.text == "report.txt"));
    }
}
