//! Core library for invoice field extraction.
//!
//! This crate provides:
//! - A gateway to the Textract expense analysis service
//! - Normalization of the detected fields into a tax id, address and total
//! - Regex fallbacks (NIP, amounts) when typed fields are missing
//! - Configuration models

pub mod error;
pub mod gateway;
pub mod invoice;
pub mod models;

pub use error::{FaktError, GatewayError, Result};
pub use gateway::{ExpenseGateway, TextractGateway};
pub use invoice::{full_text, normalize};
pub use models::config::{AwsCredentials, FaktConfig, ServerConfig, TextractConfig};
pub use models::expense::{ExtractionResult, FieldKind, StructuredField};
