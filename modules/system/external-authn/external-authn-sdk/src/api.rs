//! Public API trait for the external `AuthN` delegate.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::ExternalAuthNError;
use crate::models::{AuthOutcome, UserProfile};

/// Client used by the host flow to run one external authentication step.
///
/// ```ignore
/// let mut step_config = HashMap::new();
/// step_config.insert("external-url".to_owned(), "http://svc/auth".to_owned());
///
/// let outcome = client.evaluate(&user, &step_config).await?;
/// ```
///
/// Implementations hold no per-request state, so one instance may be shared
/// across concurrent login attempts.
#[async_trait]
pub trait ExternalAuthNClient: Send + Sync {
    /// Delegate the authentication decision for `user` to the external service.
    ///
    /// # Arguments
    ///
    /// * `user` - The user authenticated so far by the flow
    /// * `step_config` - Administrator settings of the step
    ///   (`external-url`, `external-timeout`)
    ///
    /// Remote denials and transport failures are reported through the
    /// returned [`AuthOutcome`], not as `Err`.
    ///
    /// # Errors
    ///
    /// - `ServiceUnavailable` if the evaluation was cancelled before completing
    /// - `Internal` if the evaluation task failed unexpectedly
    async fn evaluate(
        &self,
        user: &UserProfile,
        step_config: &HashMap<String, String>,
    ) -> Result<AuthOutcome, ExternalAuthNError>;
}
