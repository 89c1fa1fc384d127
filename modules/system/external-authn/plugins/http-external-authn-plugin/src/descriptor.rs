//! Provider metadata the host uses to register and configure the step.

use external_authn_sdk::{EXTERNAL_TIMEOUT_KEY, EXTERNAL_URL_KEY};
use serde::Serialize;

/// How a step may be required within a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Requirement {
    Required,
    Alternative,
    Disabled,
}

/// Value type of an administrator-facing config property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    String,
}

/// One administrator-facing config property of the step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfigProperty {
    pub name: &'static str,
    pub label: &'static str,
    pub help_text: &'static str,
    pub property_type: PropertyType,
    pub default_value: Option<&'static str>,
}

/// Static registration metadata of the authenticator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)] // mirrors the host registration flags
pub struct ProviderDescriptor {
    pub id: &'static str,
    pub display_type: &'static str,
    pub help_text: &'static str,
    pub reference_category: &'static str,
    pub configurable: bool,
    pub user_setup_allowed: bool,
    /// The flow must have identified a user before this step runs.
    pub requires_user: bool,
    /// Every user is considered configured for this step.
    pub configured_for_all_users: bool,
    pub requirement_choices: &'static [Requirement],
    pub config_properties: &'static [ConfigProperty],
}

impl ProviderDescriptor {
    /// Look up a config property by its key.
    #[must_use]
    pub fn config_property(&self, name: &str) -> Option<&'static ConfigProperty> {
        let properties: &'static [ConfigProperty] = self.config_properties;
        properties.iter().find(|p| p.name == name)
    }
}

pub const PROVIDER: ProviderDescriptor = ProviderDescriptor {
    id: "external-authenticator",
    display_type: "External HTTP Authentication",
    help_text: "Call an external HTTP service for authentication.",
    reference_category: "otp",
    configurable: true,
    user_setup_allowed: true,
    requires_user: true,
    configured_for_all_users: true,
    requirement_choices: &[
        Requirement::Required,
        Requirement::Alternative,
        Requirement::Disabled,
    ],
    config_properties: &[
        ConfigProperty {
            name: EXTERNAL_URL_KEY,
            label: "External HTTP service URL",
            help_text: "",
            property_type: PropertyType::String,
            default_value: None,
        },
        ConfigProperty {
            name: EXTERNAL_TIMEOUT_KEY,
            label: "External HTTP service call timeout (in ms)",
            help_text: "",
            property_type: PropertyType::String,
            default_value: Some("30000"),
        },
    ],
};
