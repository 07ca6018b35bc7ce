//! Error types for the fakt-core library.

use thiserror::Error;

/// Main error type for the fakt library.
#[derive(Error, Debug)]
pub enum FaktError {
    /// Expense analysis service error.
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while talking to the expense analysis service.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The service call failed (authentication, network, rejected
    /// document, outage). Carries the service's own message.
    #[error("{0}")]
    Upstream(String),
}

/// Result type for the fakt library.
pub type Result<T> = std::result::Result<T, FaktError>;
