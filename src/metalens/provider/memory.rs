use std::collections::{BTreeMap, HashMap, HashSet};

use super::{canonical_text, FormatError, MetadataProvider, QueryError};
use crate::model::{PropertyName, PropertyValue};

/// In-memory provider for tests.
///
/// Objects are keyed by an arbitrary string handle, each carrying a
/// name→value map. Faults are injectable per property name (resolve) or
/// globally (canonical conversion), so every branch of the pipeline's fault
/// handling can be exercised without a filesystem.
#[derive(Debug, Default)]
pub struct InMemoryProvider {
    objects: HashMap<String, BTreeMap<String, PropertyValue>>,
    failing_queries: HashSet<String>,
    fail_to_text: bool,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_property(
        mut self,
        handle: &str,
        name: &str,
        value: PropertyValue,
    ) -> Self {
        self.objects
            .entry(handle.to_string())
            .or_default()
            .insert(name.to_string(), value);
        self
    }

    /// Make `resolve` fail for the given property name on every object.
    pub fn with_failing_query(mut self, name: &str) -> Self {
        self.failing_queries.insert(name.to_string());
        self
    }

    /// Make the canonical-text conversion fault for every value.
    pub fn with_failing_to_text(mut self) -> Self {
        self.fail_to_text = true;
        self
    }
}

impl MetadataProvider for InMemoryProvider {
    type Handle = String;

    fn resolve(
        &self,
        handle: &String,
        name: &PropertyName,
    ) -> Result<Option<PropertyValue>, QueryError> {
        if self.failing_queries.contains(name.as_str()) {
            return Err(QueryError::new(name, "injected query failure"));
        }
        Ok(self
            .objects
            .get(handle)
            .and_then(|props| props.get(name.as_str()))
            .cloned())
    }

    fn display_format(&self, value: &PropertyValue) -> Result<String, FormatError> {
        match value {
            PropertyValue::Real(r) if !r.is_finite() => Err(FormatError::for_value(value)),
            PropertyValue::Blob(_) => Err(FormatError::for_value(value)),
            other => canonical_text(other),
        }
    }

    fn to_text(&self, value: &PropertyValue) -> Result<String, FormatError> {
        if self.fail_to_text {
            return Err(FormatError::for_value(value));
        }
        canonical_text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_present_and_absent() {
        let provider = InMemoryProvider::new().with_property(
            "doc",
            "System.Title",
            PropertyValue::Text("A Title".into()),
        );
        let handle = "doc".to_string();

        let title = provider
            .resolve(&handle, &PropertyName::new("System.Title").unwrap())
            .unwrap();
        assert_eq!(title, Some(PropertyValue::Text("A Title".into())));

        let author = provider
            .resolve(&handle, &PropertyName::new("System.Author").unwrap())
            .unwrap();
        assert_eq!(author, None);
    }

    #[test]
    fn test_injected_query_failure() {
        let provider = InMemoryProvider::new().with_failing_query("System.Comment");
        let handle = "doc".to_string();

        let err = provider
            .resolve(&handle, &PropertyName::new("System.Comment").unwrap())
            .unwrap_err();
        assert_eq!(err.name, "System.Comment");
    }
}
