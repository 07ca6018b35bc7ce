//! Expense analysis data models: raw service fields and the normalized result.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::invoice::rules::nip::validate_nip;

/// A typed key/value pair detected on a document by the expense analysis
/// service, e.g. `TOTAL` / `"1 230,00 zł"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredField {
    /// Field type label as reported by the service.
    pub label: String,

    /// Detected value text. Empty when the service found no value.
    #[serde(default)]
    pub value: String,
}

impl StructuredField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Output slot this field feeds.
    pub fn kind(&self) -> FieldKind {
        FieldKind::from_label(&self.label)
    }
}

/// Output slot selected by a field's type label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Vendor tax identifier (`VENDOR_TAX_ID`, `TAX_ID`).
    TaxId,
    /// Vendor address (`VENDOR_ADDRESS`, `ADDRESS`).
    Address,
    /// Invoice total (`TOTAL`).
    Total,
    /// Anything else. Contributes only to the full-text corpus.
    Other,
}

impl FieldKind {
    /// Map a service type label to its slot. Labels match exactly.
    pub fn from_label(label: &str) -> Self {
        match label {
            "VENDOR_TAX_ID" | "TAX_ID" => Self::TaxId,
            "VENDOR_ADDRESS" | "ADDRESS" => Self::Address,
            "TOTAL" => Self::Total,
            _ => Self::Other,
        }
    }
}

/// The three normalized invoice fields returned to callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Tax identifier, digits only. Empty when not found.
    pub vat_id: String,

    /// Vendor address exactly as detected. Empty when not found.
    pub address: String,

    /// Invoice total. Zero when not found.
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl ExtractionResult {
    /// Advisory checks on the extracted data. Never alters the result.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.vat_id.is_empty() {
            issues.push("Tax identifier not found".to_string());
        } else if !validate_nip(&self.vat_id) {
            issues.push(format!(
                "Tax identifier {} fails the NIP checksum",
                self.vat_id
            ));
        }

        if self.address.trim().is_empty() {
            issues.push("Address not found".to_string());
        }

        if self.total.is_zero() {
            issues.push("Total amount not found".to_string());
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn test_field_kind_from_label() {
        assert_eq!(FieldKind::from_label("VENDOR_TAX_ID"), FieldKind::TaxId);
        assert_eq!(FieldKind::from_label("TAX_ID"), FieldKind::TaxId);
        assert_eq!(FieldKind::from_label("VENDOR_ADDRESS"), FieldKind::Address);
        assert_eq!(FieldKind::from_label("ADDRESS"), FieldKind::Address);
        assert_eq!(FieldKind::from_label("TOTAL"), FieldKind::Total);
        assert_eq!(FieldKind::from_label("SUBTOTAL"), FieldKind::Other);
        // Labels are case-sensitive
        assert_eq!(FieldKind::from_label("total"), FieldKind::Other);
    }

    #[test]
    fn test_default_result_serialization() {
        let json = serde_json::to_value(ExtractionResult::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"vat_id": "", "address": "", "total": 0.0})
        );
    }

    #[test]
    fn test_total_serializes_as_number() {
        let result = ExtractionResult {
            vat_id: "5261040828".to_string(),
            address: "ul. Przykładowa 1, 00-001 Warszawa".to_string(),
            total: Decimal::from_str("1234.56").unwrap(),
        };

        let json = serde_json::to_value(&result).unwrap();
        let total = json["total"].as_f64().expect("total is a JSON number");
        assert!((total - 1234.56).abs() < 1e-9);
        assert_eq!(json["vat_id"], "5261040828");
    }

    #[test]
    fn test_field_value_defaults_to_empty() {
        let field: StructuredField = serde_json::from_str(r#"{"label": "TOTAL"}"#).unwrap();
        assert_eq!(field, StructuredField::new("TOTAL", ""));
    }

    #[test]
    fn test_validate() {
        assert_eq!(ExtractionResult::default().validate().len(), 3);

        let result = ExtractionResult {
            vat_id: "5261040828".to_string(),
            address: "Warszawa".to_string(),
            total: Decimal::from_str("10.00").unwrap(),
        };
        assert!(result.validate().is_empty());

        let bad_checksum = ExtractionResult {
            vat_id: "1234567890".to_string(),
            ..result
        };
        let issues = bad_checksum.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("checksum"));
    }
}
