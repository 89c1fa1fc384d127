//! Error types for the external `AuthN` delegate.

use thiserror::Error;

/// Errors that can occur when using the external `AuthN` client.
#[derive(Debug, Error)]
pub enum ExternalAuthNError {
    /// The evaluation did not run to completion.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}
