#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! HTTP External `AuthN` Plugin
//!
//! Delegates one login-flow step to an external HTTP service. The user's
//! groups, roles and attributes are POSTed as JSON to the configured URL and
//! the response status decides the outcome:
//!
//! | Response            | Outcome          |
//! |---------------------|------------------|
//! | `200`               | `Success`        |
//! | `401`, `403`        | `AccessDenied`   |
//! | any other status    | `GenericFailure` |
//! | transport failure   | `InternalError`  |
//!
//! A step without `external-url` is skipped without any call.
//!
//! ## Step configuration
//!
//! ```yaml
//! external-url: "http://auth-svc:8080/api/external_auth"
//! external-timeout: "30000"
//! ```
//!
//! ## Plugin configuration
//!
//! ```yaml
//! user_agent: "external-authn/0.1.0"
//! ```

pub mod config;
pub mod descriptor;
pub mod domain;

pub use config::{AuthConfig, HttpExternalAuthNPluginConfig};
pub use descriptor::PROVIDER;
pub use domain::{ExternalAuthNLocalClient, Service};
