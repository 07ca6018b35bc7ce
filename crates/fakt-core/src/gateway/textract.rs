//! AWS Textract `AnalyzeExpense` gateway.

use aws_sdk_textract::config::retry::RetryConfig;
use aws_sdk_textract::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_textract::error::DisplayErrorContext;
use aws_sdk_textract::operation::analyze_expense::AnalyzeExpenseOutput;
use aws_sdk_textract::primitives::Blob;
use aws_sdk_textract::types::Document;
use aws_sdk_textract::Client;
use tracing::{debug, info, warn};

use crate::error::GatewayError;
use crate::models::config::{AwsCredentials, TextractConfig};
use crate::models::expense::StructuredField;

use super::{ExpenseGateway, Result};

/// Gateway backed by the Textract expense analysis API.
#[derive(Clone, Debug)]
pub struct TextractGateway {
    client: Client,
}

impl TextractGateway {
    /// Build a client for the configured region with static credentials.
    ///
    /// Retries are disabled; a failed call is reported to the caller as-is.
    pub fn new(config: &TextractConfig, credentials: AwsCredentials) -> Self {
        let credentials = Credentials::new(
            credentials.access_key_id.unwrap_or_default(),
            credentials.secret_access_key.unwrap_or_default(),
            credentials.session_token,
            None,
            "fakt",
        );

        let mut builder = aws_sdk_textract::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .retry_config(RetryConfig::disabled());

        if let Some(url) = &config.endpoint_url {
            builder = builder.endpoint_url(url);
        }

        info!(region = %config.region, "Textract gateway configured");

        Self {
            client: Client::from_conf(builder.build()),
        }
    }
}

impl ExpenseGateway for TextractGateway {
    async fn analyze(&self, document: Vec<u8>) -> Result<Vec<StructuredField>> {
        debug!(bytes = document.len(), "Calling AnalyzeExpense");

        let output = self
            .client
            .analyze_expense()
            .document(Document::builder().bytes(Blob::new(document)).build())
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                warn!(error = %message, "AnalyzeExpense failed");
                GatewayError::Upstream(message)
            })?;

        let fields = fields_from_output(&output);
        debug!(
            documents = output.expense_documents().len(),
            fields = fields.len(),
            "AnalyzeExpense finished"
        );

        Ok(fields)
    }
}

/// Summary fields of the first expense document in a response.
///
/// A missing type or value becomes an empty string. Line items and any
/// further documents are ignored.
pub fn fields_from_output(output: &AnalyzeExpenseOutput) -> Vec<StructuredField> {
    let Some(document) = output.expense_documents().first() else {
        return Vec::new();
    };

    document
        .summary_fields()
        .iter()
        .map(|field| {
            StructuredField::new(
                field.r#type().and_then(|t| t.text()).unwrap_or_default(),
                field.value_detection().and_then(|d| d.text()).unwrap_or_default(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_textract::types::{ExpenseDetection, ExpenseDocument, ExpenseField, ExpenseType};
    use pretty_assertions::assert_eq;

    fn expense_field(label: Option<&str>, value: Option<&str>) -> ExpenseField {
        ExpenseField::builder()
            .set_type(label.map(|l| ExpenseType::builder().text(l).build()))
            .set_value_detection(value.map(|v| ExpenseDetection::builder().text(v).build()))
            .build()
    }

    #[test]
    fn test_no_documents_gives_no_fields() {
        let output = AnalyzeExpenseOutput::builder().build();
        assert!(fields_from_output(&output).is_empty());
    }

    #[test]
    fn test_summary_fields_of_first_document() {
        let first = ExpenseDocument::builder()
            .summary_fields(expense_field(Some("VENDOR_TAX_ID"), Some("526-104-08-28")))
            .summary_fields(expense_field(Some("TOTAL"), Some("1 230,00")))
            .build();
        let second = ExpenseDocument::builder()
            .summary_fields(expense_field(Some("TOTAL"), Some("99,00")))
            .build();
        let output = AnalyzeExpenseOutput::builder()
            .expense_documents(first)
            .expense_documents(second)
            .build();

        assert_eq!(
            fields_from_output(&output),
            vec![
                StructuredField::new("VENDOR_TAX_ID", "526-104-08-28"),
                StructuredField::new("TOTAL", "1 230,00"),
            ]
        );
    }

    #[test]
    fn test_missing_type_or_value_is_empty() {
        let document = ExpenseDocument::builder()
            .summary_fields(expense_field(None, Some("ul. Długa 5")))
            .summary_fields(expense_field(Some("TOTAL"), None))
            .build();
        let output = AnalyzeExpenseOutput::builder()
            .expense_documents(document)
            .build();

        assert_eq!(
            fields_from_output(&output),
            vec![
                StructuredField::new("", "ul. Długa 5"),
                StructuredField::new("TOTAL", ""),
            ]
        );
    }

    #[tokio::test]
    async fn test_unreachable_service_is_upstream_error() {
        let config = TextractConfig {
            region: "us-east-1".to_string(),
            endpoint_url: Some("http://127.0.0.1:1".to_string()),
        };
        let gateway = TextractGateway::new(&config, AwsCredentials::default());

        let err = gateway.analyze(b"%PDF-1.4".to_vec()).await.unwrap_err();
        let GatewayError::Upstream(message) = err;
        assert!(!message.is_empty());
    }
}
