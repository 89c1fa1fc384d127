//! Domain errors for the HTTP external `AuthN` plugin.

use std::io;

use external_authn_sdk::ExternalAuthNError;

/// Failure to obtain any HTTP status from the external service.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("malformed response: {0}")]
    Protocol(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("i/o error: {0}")]
    Io(String),
}

impl From<ureq::Transport> for TransportError {
    fn from(t: ureq::Transport) -> Self {
        let msg = t.to_string();
        match t.kind() {
            ureq::ErrorKind::Dns | ureq::ErrorKind::ConnectionFailed => Self::Connect(msg),
            ureq::ErrorKind::BadStatus
            | ureq::ErrorKind::BadHeader
            | ureq::ErrorKind::TooManyRedirects => Self::Protocol(msg),
            ureq::ErrorKind::InvalidUrl | ureq::ErrorKind::UnknownScheme => {
                Self::InvalidRequest(msg)
            }
            ureq::ErrorKind::Io if is_timeout(&t) => Self::Timeout(msg),
            _ => Self::Io(msg),
        }
    }
}

fn is_timeout(t: &ureq::Transport) -> bool {
    std::error::Error::source(t)
        .and_then(|source| source.downcast_ref::<io::Error>())
        .is_some_and(|e| matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock))
}

/// Failures of the async client wrapper itself.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("evaluation cancelled: {0}")]
    Cancelled(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<tokio::task::JoinError> for DomainError {
    fn from(e: tokio::task::JoinError) -> Self {
        if e.is_cancelled() {
            Self::Cancelled(e.to_string())
        } else {
            Self::Internal(e.to_string())
        }
    }
}

impl From<DomainError> for ExternalAuthNError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Cancelled(msg) => Self::ServiceUnavailable(msg),
            DomainError::Internal(msg) => Self::Internal(msg),
        }
    }
}
