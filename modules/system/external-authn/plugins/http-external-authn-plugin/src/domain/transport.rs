//! Outbound HTTP transport.

use std::time::Duration;

use http::StatusCode;
use http::header::CONTENT_TYPE;

use super::error::TransportError;
use crate::config::HttpExternalAuthNPluginConfig;

/// Sends one JSON POST and reports the response status.
///
/// Every status the server answers with, `4xx`/`5xx` included, is `Ok`.
/// `Err` means no status was obtained at all.
pub trait Transport: Send + Sync {
    /// POST `body` to `url` as `application/json`.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` on connection, timeout, or protocol failures.
    fn post_json(
        &self,
        url: &str,
        body: &[u8],
        timeout: Option<Duration>,
    ) -> Result<StatusCode, TransportError>;
}

/// Blocking transport backed by a shared `ureq` agent.
///
/// Redirects are never followed, so a `3xx` reaches the status mapping as is.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    #[must_use]
    pub fn from_config(cfg: &HttpExternalAuthNPluginConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(&cfg.user_agent)
            .redirects(0)
            .build();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn post_json(
        &self,
        url: &str,
        body: &[u8],
        timeout: Option<Duration>,
    ) -> Result<StatusCode, TransportError> {
        let mut request = self
            .agent
            .post(url)
            .set(CONTENT_TYPE.as_str(), "application/json");
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let code = match request.send_bytes(body) {
            Ok(response) => response.status(),
            Err(ureq::Error::Status(code, _)) => code,
            Err(ureq::Error::Transport(t)) => return Err(t.into()),
        };

        StatusCode::from_u16(code)
            .map_err(|e| TransportError::Protocol(format!("status {code}: {e}")))
    }
}
