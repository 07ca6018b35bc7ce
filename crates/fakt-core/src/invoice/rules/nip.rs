//! NIP (Polish Tax Identification Number) extraction and validation.

use super::patterns::NIP_STANDALONE;
use super::{ExtractionMatch, FieldExtractor};

/// NIP field extractor for free text.
///
/// Matches the 3-3-2-2 digit grouping only; checksums are not enforced so
/// foreign identifiers with the same shape are kept.
pub struct NipExtractor;

impl NipExtractor {
    /// Create a new NIP extractor.
    pub fn new() -> Self {
        Self
    }
}

impl Default for NipExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NipExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        NIP_STANDALONE
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(digits_only(m.as_str()), m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

/// Digits of the first NIP-shaped number in `text`, or an empty string.
pub fn extract_nip_from_text(text: &str) -> String {
    NipExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or_default()
}

/// Keep only ASCII digits.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validate a Polish NIP using the checksum algorithm.
///
/// NIP format: 10 digits where the last digit is a checksum.
/// Weights: 6, 5, 7, 2, 3, 4, 5, 6, 7
pub fn validate_nip(nip: &str) -> bool {
    let digits: Vec<u32> = nip.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != 10 {
        return false;
    }

    let weights = [6, 5, 7, 2, 3, 4, 5, 6, 7];
    let sum: u32 = digits
        .iter()
        .take(9)
        .zip(weights.iter())
        .map(|(d, w)| d * w)
        .sum();

    let checksum = sum % 11;

    // A checksum of 10 never appears on an issued NIP
    checksum != 10 && checksum == digits[9]
}

/// Format NIP with dashes (XXX-XXX-XX-XX).
pub fn format_nip(nip: &str) -> String {
    let digits = digits_only(nip);

    if digits.len() != 10 {
        return nip.to_string();
    }

    format!(
        "{}-{}-{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..8],
        &digits[8..10]
    )
}
