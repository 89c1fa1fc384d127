//! Layered settings: YAML file, then `EXTERNAL_AUTHN__*` environment variables.

use std::collections::HashMap;
use std::path::Path;

use external_authn_sdk::UserProfile;
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use http_external_authn_plugin::HttpExternalAuthNPluginConfig;
use serde::Deserialize;

pub const ENV_PREFIX: &str = "EXTERNAL_AUTHN__";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckSettings {
    pub plugin: HttpExternalAuthNPluginConfig,
    /// Step config map, keyed like the host's (`external-url`, `external-timeout`).
    pub step: HashMap<String, String>,
    pub user: UserProfile,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    /// Filter used when `RUST_LOG` is unset.
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

/// Load settings from an optional YAML file overlaid with environment variables.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a value has the wrong shape.
pub fn load(path: Option<&Path>) -> Result<CheckSettings, figment::Error> {
    let mut figment = Figment::new();
    if let Some(path) = path {
        figment = figment.merge(Yaml::file(path));
    }
    figment.merge(env_provider()).extract()
}

/// `EXTERNAL_AUTHN__` variables, nested on `__`.
///
/// Step keys are hyphenated on the host, so `..._STEP__EXTERNAL_URL` lands on
/// `step.external-url`.
fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX)
        .split("__")
        .map(|key| {
            let key = key.as_str().to_ascii_lowercase();
            match key.strip_prefix("step.") {
                Some(step_key) => format!("step.{}", step_key.replace('_', "-")).into(),
                None => key.into(),
            }
        })
}
