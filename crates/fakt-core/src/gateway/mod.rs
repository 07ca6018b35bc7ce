//! Gateway to the expense analysis service.

mod textract;

pub use textract::{fields_from_output, TextractGateway};

use std::future::Future;

use crate::error::GatewayError;
use crate::models::expense::StructuredField;

/// Result type for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;

/// A service that detects typed fields on an invoice document.
pub trait ExpenseGateway: Send + Sync + 'static {
    /// Analyze one document (PDF, PNG, JPEG or TIFF bytes).
    ///
    /// Returns the summary fields of the first detected expense document,
    /// or an empty list when none was detected.
    fn analyze(
        &self,
        document: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<StructuredField>>> + Send;
}
