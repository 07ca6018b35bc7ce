//! Field normalizer turning raw service fields into an extraction result.

use tracing::debug;

use crate::models::expense::{ExtractionResult, FieldKind, StructuredField};

use super::rules::{digits_only, extract_largest_amount, extract_nip_from_text, normalize_amount};

/// Normalize the fields reported for one document.
///
/// Typed fields fill their slot directly, the last occurrence winning. A
/// slot left empty (or a zero total) is then recovered from the full text
/// of all fields: the first NIP-shaped number for the tax identifier and
/// the largest amount for the total. The address has no fallback.
pub fn normalize(fields: &[StructuredField]) -> ExtractionResult {
    let mut result = ExtractionResult::default();

    for field in fields {
        match field.kind() {
            FieldKind::TaxId => result.vat_id = digits_only(&field.value),
            FieldKind::Address => result.address = field.value.clone(),
            FieldKind::Total => result.total = normalize_amount(&field.value),
            FieldKind::Other => {}
        }
    }

    let text = full_text(fields);

    if result.vat_id.is_empty() {
        result.vat_id = extract_nip_from_text(&text);
        debug!(found = !result.vat_id.is_empty(), "tax id recovered from text");
    }

    // A genuine zero TOTAL also lands here
    if result.total.is_zero() {
        result.total = extract_largest_amount(&text);
        debug!(total = %result.total, "total recovered from text");
    }

    result
}

/// Space-joined values of all fields with content, in order.
pub fn full_text(fields: &[StructuredField]) -> String {
    fields
        .iter()
        .filter(|f| !f.value.is_empty())
        .map(|f| f.value.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
