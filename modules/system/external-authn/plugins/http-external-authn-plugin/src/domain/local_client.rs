//! Local (in-process) async client for the external `AuthN` plugin.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use external_authn_sdk::{AuthOutcome, ExternalAuthNClient, ExternalAuthNError, UserProfile};

use super::{DomainError, Service};
use crate::config::AuthConfig;

/// Async client wrapping the blocking service.
///
/// The HTTP call runs on the blocking thread pool so async hosts never stall
/// a reactor thread while waiting for the external service.
pub struct ExternalAuthNLocalClient {
    svc: Arc<Service>,
}

impl ExternalAuthNLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> ExternalAuthNError {
    tracing::error!(operation = op, error = %e, "external_authn call failed");
    e.into()
}

#[async_trait]
impl ExternalAuthNClient for ExternalAuthNLocalClient {
    async fn evaluate(
        &self,
        user: &UserProfile,
        step_config: &HashMap<String, String>,
    ) -> Result<AuthOutcome, ExternalAuthNError> {
        let svc = Arc::clone(&self.svc);
        let user = user.clone();
        let config = AuthConfig::from_map(step_config);
        let span = tracing::Span::current();

        tokio::task::spawn_blocking(move || span.in_scope(|| svc.evaluate(&user, &config)))
            .await
            .map_err(|e| log_and_convert("evaluate", e.into()))
    }
}
