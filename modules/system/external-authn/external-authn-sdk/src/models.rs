//! Domain models for the external `AuthN` delegate.

use std::collections::BTreeMap;

use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Step config key holding the external service URL.
pub const EXTERNAL_URL_KEY: &str = "external-url";

/// Step config key holding the call timeout in milliseconds.
pub const EXTERNAL_TIMEOUT_KEY: &str = "external-timeout";

/// Timeout used when `external-timeout` is unset or not a number.
pub const DEFAULT_EXTERNAL_TIMEOUT_MS: u64 = 30_000;

/// The user being authenticated, as supplied by the host flow.
///
/// Groups and roles keep the order the host provided them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub username: String,
    pub groups: Vec<String>,
    pub roles: Vec<String>,
    /// Multi-valued user attributes. Only the first value of each is forwarded.
    pub attributes: BTreeMap<String, Vec<String>>,
}

impl UserProfile {
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.groups.push(group.into());
        self
    }

    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    /// Set attribute `name` to `values`, replacing any previous values.
    #[must_use]
    pub fn with_attribute<I, V>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.attributes
            .insert(name.into(), values.into_iter().map(Into::into).collect());
        self
    }
}

/// Step-level verdict the host uses to advance, deny, or await a retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowStatus {
    /// The step ran but did not complete (not configured).
    Attempted,
    Success,
    Failed,
}

/// Error kind reported to the host flow for a failed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlowError {
    AccessDenied,
    GenericAuthenticationError,
    InternalError,
}

/// Outcome of one delegated authentication check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AuthOutcome {
    /// No external URL configured; no call was made.
    Skipped,
    /// The external service answered `200 OK`.
    Success,
    /// The external service answered `401` or `403`.
    AccessDenied { message: String },
    /// The external service answered with any other status.
    GenericFailure { message: String },
    /// The call failed at the transport level. The cause is only logged.
    InternalError,
}

impl AuthOutcome {
    /// User-visible message for [`AuthOutcome::AccessDenied`].
    pub const ACCESS_DENIED_MESSAGE: &'static str = "access denied";

    /// User-visible message for [`AuthOutcome::GenericFailure`].
    pub const UNEXPECTED_STATUS_MESSAGE: &'static str = "unexpected response status code";

    #[must_use]
    pub fn access_denied() -> Self {
        Self::AccessDenied {
            message: Self::ACCESS_DENIED_MESSAGE.to_owned(),
        }
    }

    #[must_use]
    pub fn generic_failure() -> Self {
        Self::GenericFailure {
            message: Self::UNEXPECTED_STATUS_MESSAGE.to_owned(),
        }
    }

    #[must_use]
    pub fn flow_status(&self) -> FlowStatus {
        match self {
            Self::Skipped => FlowStatus::Attempted,
            Self::Success => FlowStatus::Success,
            Self::AccessDenied { .. } | Self::GenericFailure { .. } | Self::InternalError => {
                FlowStatus::Failed
            }
        }
    }

    /// Error kind to report to the flow, `None` unless the step failed.
    #[must_use]
    pub fn flow_error(&self) -> Option<FlowError> {
        match self {
            Self::Skipped | Self::Success => None,
            Self::AccessDenied { .. } => Some(FlowError::AccessDenied),
            Self::GenericFailure { .. } => Some(FlowError::GenericAuthenticationError),
            Self::InternalError => Some(FlowError::InternalError),
        }
    }

    /// Human-readable message to show the user, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::AccessDenied { message } | Self::GenericFailure { message } => Some(message),
            Self::Skipped | Self::Success | Self::InternalError => None,
        }
    }

    /// Status of the error page rendered at the host boundary.
    ///
    /// Internal errors carry no page of their own; the host shows its generic one.
    #[must_use]
    pub fn error_page_status(&self) -> Option<StatusCode> {
        match self {
            Self::AccessDenied { .. } => Some(StatusCode::UNAUTHORIZED),
            Self::GenericFailure { .. } => Some(StatusCode::BAD_REQUEST),
            Self::Skipped | Self::Success | Self::InternalError => None,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn skipped_is_attempted_not_failed() {
        let outcome = AuthOutcome::Skipped;
        assert_eq!(outcome.flow_status(), FlowStatus::Attempted);
        assert!(outcome.flow_error().is_none());
        assert!(outcome.message().is_none());
    }

    #[test]
    fn access_denied_renders_unauthorized_page() {
        let outcome = AuthOutcome::access_denied();
        assert_eq!(outcome.flow_status(), FlowStatus::Failed);
        assert_eq!(outcome.flow_error(), Some(FlowError::AccessDenied));
        assert_eq!(outcome.message(), Some("access denied"));
        assert_eq!(outcome.error_page_status(), Some(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn generic_failure_renders_bad_request_page() {
        let outcome = AuthOutcome::generic_failure();
        assert_eq!(
            outcome.flow_error(),
            Some(FlowError::GenericAuthenticationError)
        );
        assert_eq!(outcome.message(), Some("unexpected response status code"));
        assert_eq!(outcome.error_page_status(), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn internal_error_hides_cause() {
        let outcome = AuthOutcome::InternalError;
        assert_eq!(outcome.flow_status(), FlowStatus::Failed);
        assert_eq!(outcome.flow_error(), Some(FlowError::InternalError));
        assert!(outcome.message().is_none());
        assert!(outcome.error_page_status().is_none());
    }

    #[test]
    fn outcome_serializes_with_tag() {
        let json = serde_json::to_value(AuthOutcome::access_denied()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"outcome": "access_denied", "message": "access denied"})
        );

        let json = serde_json::to_value(AuthOutcome::Success).unwrap();
        assert_eq!(json, serde_json::json!({"outcome": "success"}));
    }

    #[test]
    fn profile_builder_keeps_order() {
        let user = UserProfile::new("alice")
            .with_group("admins")
            .with_group("ops")
            .with_role("viewer")
            .with_attribute("dept", ["eng", "sales"]);

        assert_eq!(user.username, "alice");
        assert_eq!(user.groups, vec!["admins", "ops"]);
        assert_eq!(user.roles, vec!["viewer"]);
        assert_eq!(user.attributes["dept"], vec!["eng", "sales"]);
    }
}
