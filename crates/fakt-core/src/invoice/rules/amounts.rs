//! Amount parsing and fallback extraction.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::AMOUNT_PATTERN;
use super::{ExtractionMatch, FieldExtractor};

/// Amount field extractor.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = ExtractionMatch<Decimal>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        AMOUNT_PATTERN
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(normalize_amount(m.as_str()), m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

/// Parse an amount as printed on an invoice.
///
/// Spaces are removed, commas become decimal points and every other
/// non-digit character is dropped before parsing. Anything that still does
/// not parse (e.g. `"12..34"`) yields zero.
pub fn normalize_amount(value: &str) -> Decimal {
    if value.is_empty() {
        return Decimal::ZERO;
    }

    let cleaned: String = value
        .replace(' ', "")
        .replace(',', ".")
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO)
}

/// Largest amount found anywhere in `text`, or zero.
pub fn extract_largest_amount(text: &str) -> Decimal {
    AmountExtractor::new()
        .extract_all(text)
        .into_iter()
        .map(|m| m.value)
        .max()
        .unwrap_or(Decimal::ZERO)
}

/// Format amount in Polish style (1 234,56).
pub fn format_amount(amount: Decimal) -> String {
    let s = format!("{:.2}", amount);
    let (integer_part, decimal_part) = match s.split_once('.') {
        Some(parts) => parts,
        None => return s,
    };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    // Add thousand separators
    let chars: Vec<char> = digits.chars().collect();
    let mut formatted = String::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push(' ');
        }
        formatted.push(*c);
    }

    format!("{}{},{}", sign, formatted, decimal_part)
}
