use std::fmt;

use chrono::{DateTime, Local};

/// Precedence class of a property name, derived from its segment count.
///
/// Two-segment names (`System.Title`) are the commonly inspected ones and sort
/// ahead of the deeper category names (`System.Image.HorizontalSize`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Primary,
    Secondary,
}

/// A canonical, dot-separated property name such as `System.Title`.
///
/// Always non-empty with at least two non-empty segments; construction
/// enforces this, so every `PropertyName` in circulation is well-formed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropertyName(String);

impl PropertyName {
    /// Validate and wrap a raw canonical name. Returns `None` for names that
    /// are empty or have fewer than two dot-separated segments.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let mut segments = 0;
        for segment in raw.split('.') {
            if segment.is_empty() {
                return None;
            }
            segments += 1;
        }
        if segments < 2 {
            return None;
        }
        Some(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name length in characters, the unit the report layout works in.
    pub fn width(&self) -> usize {
        self.0.chars().count()
    }

    pub fn segment_count(&self) -> usize {
        self.0.split('.').count()
    }

    pub fn tier(&self) -> Tier {
        if self.segment_count() == 2 {
            Tier::Primary
        } else {
            Tier::Secondary
        }
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A raw property value as handed back by a metadata provider.
///
/// `Blob` carries provider-native bytes that have no textual form; asking for
/// its canonical text faults, which is what drives the formatter's last
/// fallback step.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Text(String),
    UInt(u64),
    Real(f64),
    /// A byte count. Distinct from `UInt` so display formatting can humanize it.
    Size(u64),
    Timestamp(DateTime<Local>),
    Bool(bool),
    List(Vec<String>),
    Blob(Vec<u8>),
}

impl PropertyValue {
    /// Kind name used in fault messages.
    pub fn kind(&self) -> &'static str {
        match self {
            PropertyValue::Text(_) => "text",
            PropertyValue::UInt(_) => "integer",
            PropertyValue::Real(_) => "real",
            PropertyValue::Size(_) => "size",
            PropertyValue::Timestamp(_) => "timestamp",
            PropertyValue::Bool(_) => "boolean",
            PropertyValue::List(_) => "list",
            PropertyValue::Blob(_) => "binary",
        }
    }
}

/// One collected property: a present value under its canonical name.
///
/// Records only exist for values the provider actually resolved; absent
/// properties never become records.
#[derive(Debug, Clone)]
pub struct PropertyRecord {
    pub name: PropertyName,
    pub value: PropertyValue,
}

impl PropertyRecord {
    pub fn new(name: PropertyName, value: PropertyValue) -> Self {
        Self { name, value }
    }

    pub fn tier(&self) -> Tier {
        self.name.tier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_validation() {
        assert!(PropertyName::new("System.Title").is_some());
        assert!(PropertyName::new("System.Image.HorizontalSize").is_some());
        assert!(PropertyName::new("").is_none());
        assert!(PropertyName::new("System").is_none());
        assert!(PropertyName::new("System.").is_none());
        assert!(PropertyName::new(".Title").is_none());
        assert!(PropertyName::new("System..Title").is_none());
    }

    #[test]
    fn test_tier_from_segments() {
        let primary = PropertyName::new("System.Author").unwrap();
        let secondary = PropertyName::new("System.Photo.DateTaken").unwrap();
        assert_eq!(primary.tier(), Tier::Primary);
        assert_eq!(secondary.tier(), Tier::Secondary);
        assert!(Tier::Primary < Tier::Secondary);
    }

    #[test]
    fn test_name_width_counts_chars() {
        let name = PropertyName::new("System.Title").unwrap();
        assert_eq!(name.width(), 12);
    }
}
