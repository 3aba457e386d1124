//! # Provider Layer
//!
//! This module defines the metadata backend abstraction. The
//! [`MetadataProvider`] trait is the only contract the report pipeline has
//! with the outside world: resolve a canonical name to a value-or-absent, and
//! format a value for display (which may fault).
//!
//! ## Design Rationale
//!
//! The backend is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryProvider` (no filesystem needed)
//! - Allow **future backends** (extended attributes, media taggers, etc.)
//!   without touching the pipeline
//! - Keep the pipeline's fault handling **backend-agnostic**: any backend
//!   that can say "value or absent" and "formatted or faulted" fits
//!
//! ## Implementations
//!
//! - [`fs::FsProvider`]: production provider over `std::fs` metadata
//! - [`memory::InMemoryProvider`]: in-memory provider for tests, with
//!   injectable faults

use thiserror::Error;

use crate::model::{PropertyName, PropertyValue};

pub mod fs;
pub mod memory;

/// A single-property lookup failed in the backend.
///
/// Collection treats this exactly like an absent value; it never aborts the
/// surrounding batch.
#[derive(Error, Debug)]
#[error("query for {name} failed: {reason}")]
pub struct QueryError {
    pub name: String,
    pub reason: String,
}

impl QueryError {
    pub fn new(name: &PropertyName, reason: impl Into<String>) -> Self {
        Self {
            name: name.as_str().to_string(),
            reason: reason.into(),
        }
    }
}

/// A value could not be rendered to text.
///
/// Raised by both the display formatter and the canonical-text conversion;
/// the formatter's fallback chain contains it.
#[derive(Error, Debug)]
#[error("cannot render {kind} value as text")]
pub struct FormatError {
    pub kind: &'static str,
}

impl FormatError {
    pub fn for_value(value: &PropertyValue) -> Self {
        Self { kind: value.kind() }
    }
}

/// Abstract interface to a metadata backend.
///
/// `Handle` identifies one metadata-bearing object for the duration of a
/// single report run.
pub trait MetadataProvider {
    type Handle;

    /// Look up one property on an object. `Ok(None)` means the property has
    /// no value there; `Err` means the lookup itself failed.
    fn resolve(
        &self,
        handle: &Self::Handle,
        name: &PropertyName,
    ) -> Result<Option<PropertyValue>, QueryError>;

    /// Backend-native display formatting (locale conventions, humanized
    /// units). May fault for values the backend cannot render.
    fn display_format(&self, value: &PropertyValue) -> Result<String, FormatError>;

    /// Canonical text conversion, the fallback when display formatting
    /// faults. May itself fault for values with no textual form.
    fn to_text(&self, value: &PropertyValue) -> Result<String, FormatError> {
        canonical_text(value)
    }
}

/// Default canonical text form of a value: plain, locale-independent.
///
/// Blobs have no textual form and fault.
pub fn canonical_text(value: &PropertyValue) -> Result<String, FormatError> {
    match value {
        PropertyValue::Text(s) => Ok(s.clone()),
        PropertyValue::UInt(n) => Ok(n.to_string()),
        PropertyValue::Real(r) => Ok(r.to_string()),
        PropertyValue::Size(bytes) => Ok(bytes.to_string()),
        PropertyValue::Timestamp(ts) => Ok(ts.to_rfc3339()),
        PropertyValue::Bool(b) => Ok(b.to_string()),
        PropertyValue::List(items) => Ok(items.join("; ")),
        PropertyValue::Blob(_) => Err(FormatError::for_value(value)),
    }
}
