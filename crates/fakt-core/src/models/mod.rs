//! Data models and configuration.

pub mod config;
pub mod expense;

pub use config::{AwsCredentials, FaktConfig, ServerConfig, TextractConfig};
pub use expense::{ExtractionResult, FieldKind, StructuredField};
