//! Service implementation for the HTTP external `AuthN` plugin.

use std::sync::Arc;

use external_authn_sdk::{AuthOutcome, UserProfile};
use http::StatusCode;
use tracing::{debug, error, warn};

use super::payload::UserPayload;
use super::transport::{Transport, UreqTransport};
use crate::config::{AuthConfig, HttpExternalAuthNPluginConfig};

/// External `AuthN` service.
///
/// Holds no per-request state: build it once and share it behind an `Arc`.
/// Each [`Service::evaluate`] call issues at most one request and never retries.
pub struct Service {
    transport: Arc<dyn Transport>,
}

impl Service {
    /// Create a service with the `ureq` transport.
    #[must_use]
    pub fn from_config(cfg: &HttpExternalAuthNPluginConfig) -> Self {
        Self::with_transport(Arc::new(UreqTransport::from_config(cfg)))
    }

    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Delegate the authentication decision for `user` to the configured URL.
    ///
    /// Blocks until the external service answers or the timeout elapses.
    #[must_use]
    #[tracing::instrument(skip_all, fields(username = %user.username))]
    pub fn evaluate(&self, user: &UserProfile, config: &AuthConfig) -> AuthOutcome {
        let Some(url) = config.url() else {
            warn!("External URL is empty, skipping");
            return AuthOutcome::Skipped;
        };

        let body = match UserPayload::from_profile(user).to_json() {
            Ok(body) => body,
            Err(e) => {
                error!(error = %e, "Failed to serialize user payload");
                return AuthOutcome::InternalError;
            }
        };

        debug!(
            url,
            timeout = ?config.timeout(),
            "Calling external authentication service"
        );

        match self.transport.post_json(url, &body, config.timeout()) {
            Ok(status) => map_status(status, url),
            Err(e) => {
                error!(url, error = %e, "Unexpected error calling external authentication service");
                AuthOutcome::InternalError
            }
        }
    }
}

fn map_status(status: StatusCode, url: &str) -> AuthOutcome {
    match status {
        StatusCode::OK => AuthOutcome::Success,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            debug!(status = status.as_u16(), "External service denied access");
            AuthOutcome::access_denied()
        }
        other => {
            error!(
                status = other.as_u16(),
                url, "Unexpected response status code from external service"
            );
            AuthOutcome::generic_failure()
        }
    }
}
