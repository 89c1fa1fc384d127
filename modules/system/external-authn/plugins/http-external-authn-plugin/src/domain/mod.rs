//! Domain layer for the HTTP external `AuthN` plugin.

pub mod error;
pub mod local_client;
pub mod payload;
pub mod service;
pub mod transport;

pub use error::{DomainError, TransportError};
pub use local_client::ExternalAuthNLocalClient;
pub use payload::UserPayload;
pub use service::Service;
pub use transport::{Transport, UreqTransport};
