//! Configuration for the HTTP external `AuthN` plugin.

use std::collections::HashMap;
use std::time::Duration;

use external_authn_sdk::{DEFAULT_EXTERNAL_TIMEOUT_MS, EXTERNAL_TIMEOUT_KEY, EXTERNAL_URL_KEY};
use serde::Deserialize;
use tracing::{debug, warn};

/// Plugin configuration, shared by every step instance.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpExternalAuthNPluginConfig {
    /// `User-Agent` header sent with every call.
    pub user_agent: String,
}

impl Default for HttpExternalAuthNPluginConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("external-authn/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

/// Settings of one flow step, read from the administrator's config map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    url: Option<String>,
    timeout: Option<Duration>,
}

impl AuthConfig {
    /// Build a step config directly. A blank `url` means "not configured".
    #[must_use]
    pub fn new(url: &str, timeout: Option<Duration>) -> Self {
        Self {
            url: non_blank(Some(url)).map(str::to_owned),
            timeout,
        }
    }

    /// Parse the host config map (`external-url`, `external-timeout`).
    ///
    /// The timeout falls back to 30 s when it is unset, blank, or not a
    /// number. Zero or negative values disable the explicit timeout.
    #[must_use]
    pub fn from_map(map: &HashMap<String, String>) -> Self {
        Self {
            url: non_blank(map.get(EXTERNAL_URL_KEY).map(String::as_str)).map(str::to_owned),
            timeout: parse_timeout(map.get(EXTERNAL_TIMEOUT_KEY).map(String::as_str)),
        }
    }

    /// Target URL, `None` when the step is not configured.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Request timeout, `None` when the transport default applies.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_timeout(raw: Option<&str>) -> Option<Duration> {
    let default = Some(Duration::from_millis(DEFAULT_EXTERNAL_TIMEOUT_MS));
    let Some(raw) = non_blank(raw) else {
        return default;
    };

    match raw.parse::<i64>() {
        Ok(ms) => {
            let timeout = u64::try_from(ms)
                .ok()
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis);
            if timeout.is_none() {
                debug!(value = raw, "External timeout disabled, call is unbounded");
            }
            timeout
        }
        Err(e) => {
            warn!(
                value = raw,
                error = %e,
                default_ms = DEFAULT_EXTERNAL_TIMEOUT_MS,
                "Invalid external timeout, using default"
            );
            default
        }
    }
}
