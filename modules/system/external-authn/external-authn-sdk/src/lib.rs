#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! External `AuthN` SDK
//!
//! This crate provides the public API of the external authentication delegate:
//!
//! - [`ExternalAuthNClient`] - Client trait consumed by the host flow
//! - [`UserProfile`] - Identity of the user being authenticated
//! - [`AuthOutcome`] - Result of one delegated check
//! - [`ExternalAuthNError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use external_authn_sdk::{ExternalAuthNClient, UserProfile};
//!
//! let outcome = client.evaluate(&user, &step_config).await?;
//! match outcome.flow_status() {
//!     FlowStatus::Success => { /* advance the flow */ }
//!     FlowStatus::Attempted => { /* step not configured */ }
//!     FlowStatus::Failed => { /* render outcome.message() */ }
//! }
//! ```

pub mod api;
pub mod error;
pub mod models;

// Re-export main types at crate root
pub use api::ExternalAuthNClient;
pub use error::ExternalAuthNError;
pub use models::{
    AuthOutcome, DEFAULT_EXTERNAL_TIMEOUT_MS, EXTERNAL_TIMEOUT_KEY, EXTERNAL_URL_KEY, FlowError,
    FlowStatus, UserProfile,
};
