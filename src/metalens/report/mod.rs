//! # Report Pipeline
//!
//! Turning one object handle into a finished console report happens in four
//! stages, each its own module:
//!
//! ```text
//! catalog ──▶ collect ──▶ order ──▶ format ──▶ render
//! ```
//!
//! - [`collect`]: query every catalog name, keep only present values
//! - [`order`]: two-tier precedence sort (top-level names first)
//! - [`format`]: value → display text, with a contained fallback chain
//! - [`render`]: column-aligned, word-wrapped layout plus the count line
//!
//! The pipeline is pure with respect to I/O: it talks to the world only
//! through the [`MetadataProvider`] it is handed, and it never fails. Every
//! per-property fault is either an absence or a fallback, recorded at most as
//! a warning message on the [`Report`].

use crate::catalog::PropertyCatalog;
use crate::model::PropertyName;
use crate::provider::MetadataProvider;

pub mod collect;
pub mod format;
pub mod order;
pub mod render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
}

/// A side note attached to a report, e.g. a skipped property. Never part of
/// the report body.
#[derive(Debug, Clone)]
pub struct ReportMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl ReportMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// One rendered report row: a canonical name and its display text.
#[derive(Debug, Clone)]
pub struct ReportEntry {
    pub name: PropertyName,
    pub text: String,
}

/// A finished report: ordered entries plus collection warnings.
///
/// Built fresh per inspection and owned by the caller; the count is always
/// the number of entries, even when some entries carry fallback text.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub entries: Vec<ReportEntry>,
    pub messages: Vec<ReportMessage>,
}

impl Report {
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Character width of the longest name, the base of all layout widths.
    /// `None` for an empty report, which renders as the count line only.
    pub fn max_name_width(&self) -> Option<usize> {
        self.entries.iter().map(|e| e.name.width()).max()
    }
}

/// Run the full pipeline for one object handle.
pub fn build<P: MetadataProvider>(
    provider: &P,
    handle: &P::Handle,
    catalog: &PropertyCatalog,
) -> Report {
    let (mut records, messages) = collect::collect(provider, handle, catalog);
    order::order(&mut records);

    let entries = records
        .into_iter()
        .map(|record| ReportEntry {
            text: format::format_value(provider, &record.value),
            name: record.name,
        })
        .collect();

    Report { entries, messages }
}
