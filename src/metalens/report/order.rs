use crate::model::PropertyRecord;

/// Sort records by the two-tier precedence rule: primary names (exactly two
/// segments) before secondary ones, each group ascending by case-sensitive
/// ordinal comparison. The sort is stable, so equal keys keep collection
/// order.
pub fn order(records: &mut [PropertyRecord]) {
    records.sort_by(|a, b| {
        a.tier()
            .cmp(&b.tier())
            .then_with(|| a.name.cmp(&b.name))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PropertyName, PropertyValue, Tier};

    fn record(name: &str) -> PropertyRecord {
        PropertyRecord::new(
            PropertyName::new(name).unwrap(),
            PropertyValue::Text(String::new()),
        )
    }

    #[test]
    fn test_partition_primary_before_secondary() {
        let mut records = vec![
            record("System.Image.HorizontalSize"),
            record("System.Title"),
            record("System.Audio.Format"),
            record("System.Author"),
        ];
        order(&mut records);

        let tiers: Vec<Tier> = records.iter().map(|r| r.tier()).collect();
        assert_eq!(
            tiers,
            vec![Tier::Primary, Tier::Primary, Tier::Secondary, Tier::Secondary]
        );
    }

    #[test]
    fn test_ordinal_ascending_within_partitions() {
        let mut records = vec![
            record("System.Title"),
            record("System.Image.VerticalSize"),
            record("System.Author"),
            record("System.Image.HorizontalSize"),
        ];
        order(&mut records);

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "System.Author",
                "System.Title",
                "System.Image.HorizontalSize",
                "System.Image.VerticalSize",
            ]
        );
    }

    #[test]
    fn test_ordinal_is_case_sensitive() {
        // Ordinal comparison puts uppercase before lowercase.
        let mut records = vec![record("System.size"), record("System.Size")];
        order(&mut records);

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["System.Size", "System.size"]);
    }
}
