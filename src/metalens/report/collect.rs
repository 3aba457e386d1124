use super::ReportMessage;
use crate::catalog::PropertyCatalog;
use crate::model::PropertyRecord;
use crate::provider::MetadataProvider;

/// Query every catalog name against one object and keep the present values.
///
/// Absent properties leave no trace. A failed query is treated as absent too,
/// recorded only as a warning; one bad property must never cost the rest of
/// the batch.
pub fn collect<P: MetadataProvider>(
    provider: &P,
    handle: &P::Handle,
    catalog: &PropertyCatalog,
) -> (Vec<PropertyRecord>, Vec<ReportMessage>) {
    let mut records = Vec::new();
    let mut messages = Vec::new();

    for name in catalog.names() {
        match provider.resolve(handle, name) {
            Ok(Some(value)) => records.push(PropertyRecord::new(name.clone(), value)),
            Ok(None) => {}
            Err(err) => messages.push(ReportMessage::warning(format!("Skipped {}: {}", name, err))),
        }
    }

    (records, messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PropertyValue;
    use crate::provider::memory::InMemoryProvider;

    #[test]
    fn test_absent_properties_are_not_collected() {
        let provider = InMemoryProvider::new().with_property(
            "doc",
            "System.Title",
            PropertyValue::Text("T".into()),
        );
        let catalog = PropertyCatalog::from_names(["System.Title", "System.Author"]);

        let (records, messages) = collect(&provider, &"doc".to_string(), &catalog);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name.as_str(), "System.Title");
        assert!(messages.is_empty());
    }

    #[test]
    fn test_query_failure_skips_and_continues() {
        let provider = InMemoryProvider::new()
            .with_property("doc", "System.Author", PropertyValue::Text("Ada".into()))
            .with_property("doc", "System.Title", PropertyValue::Text("T".into()))
            .with_failing_query("System.Author");
        let catalog = PropertyCatalog::from_names(["System.Author", "System.Title"]);

        let (records, messages) = collect(&provider, &"doc".to_string(), &catalog);

        // The failing property is dropped, the rest of the batch survives.
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name.as_str(), "System.Title");
        assert_eq!(messages.len(), 1);
        assert!(messages[0].content.contains("System.Author"));
    }

    #[test]
    fn test_collection_follows_catalog_order() {
        let provider = InMemoryProvider::new()
            .with_property("doc", "System.Title", PropertyValue::Text("T".into()))
            .with_property("doc", "System.Author", PropertyValue::Text("A".into()));
        let catalog = PropertyCatalog::from_names(["System.Title", "System.Author"]);

        let (records, _) = collect(&provider, &"doc".to_string(), &catalog);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["System.Title", "System.Author"]);
    }
}
