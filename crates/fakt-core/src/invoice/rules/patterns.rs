//! Common regex patterns for invoice text fallback extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // NIP (Polish tax ID), 3-3-2-2 grouping with optional separators.
    // ASCII digits only, like digits_only().
    pub static ref NIP_STANDALONE: Regex = Regex::new(
        r"\b([0-9]{3})[- ]?([0-9]{3})[- ]?([0-9]{2})[- ]?([0-9]{2})\b"
    ).unwrap();

    // Amounts with two decimal places (1234,56 or 1234.56), ASCII digits only
    pub static ref AMOUNT_PATTERN: Regex = Regex::new(
        r"[0-9]+[.,][0-9]{2}"
    ).unwrap();
}
