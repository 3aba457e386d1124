use crate::model::PropertyValue;
use crate::provider::MetadataProvider;

/// Shown when a present value survives neither display formatting nor
/// canonical conversion. The record still counts toward the report.
pub const FALLBACK_TEXT: &str = "Error: Unable to print this property as a text.";

/// Produce display text for one value. First success wins:
///
/// 1. the provider's display formatting,
/// 2. the canonical text conversion,
/// 3. the literal [`FALLBACK_TEXT`].
///
/// Never fails; each record formats in isolation.
pub fn format_value<P: MetadataProvider>(provider: &P, value: &PropertyValue) -> String {
    provider
        .display_format(value)
        .or_else(|_| provider.to_text(value))
        .unwrap_or_else(|_| FALLBACK_TEXT.to_string())
}
