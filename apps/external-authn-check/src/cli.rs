use std::path::PathBuf;

use clap::Parser;
use external_authn_sdk::{EXTERNAL_TIMEOUT_KEY, EXTERNAL_URL_KEY};

use crate::settings::CheckSettings;

/// Run one external authentication check and print the outcome as JSON.
///
/// Exit code: 0 on success, 1 when the step failed, 2 when it was skipped.
#[derive(Debug, Parser)]
#[command(name = "external-authn-check", version)]
pub struct Cli {
    /// YAML settings file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// External service URL (overrides `step.external-url`).
    #[arg(long)]
    pub url: Option<String>,

    /// Call timeout in milliseconds (overrides `step.external-timeout`).
    #[arg(long)]
    pub timeout_ms: Option<String>,

    #[arg(long)]
    pub username: Option<String>,

    /// Group membership, repeatable.
    #[arg(long = "group")]
    pub groups: Vec<String>,

    /// Role mapping, repeatable.
    #[arg(long = "role")]
    pub roles: Vec<String>,

    /// Attribute as `name=value`, repeatable. Repeating a name adds values.
    #[arg(long = "attr", value_parser = parse_attribute)]
    pub attributes: Vec<(String, String)>,

    /// Emit logs as JSON.
    #[arg(long)]
    pub json_logs: bool,

    /// Print the provider registration metadata and exit.
    #[arg(long)]
    pub describe: bool,
}

impl Cli {
    /// Overlay command-line values on the loaded settings.
    pub fn apply(&self, settings: &mut CheckSettings) {
        if let Some(url) = &self.url {
            settings
                .step
                .insert(EXTERNAL_URL_KEY.to_owned(), url.clone());
        }
        if let Some(timeout) = &self.timeout_ms {
            settings
                .step
                .insert(EXTERNAL_TIMEOUT_KEY.to_owned(), timeout.clone());
        }
        if let Some(username) = &self.username {
            settings.user.username.clone_from(username);
        }
        settings.user.groups.extend(self.groups.iter().cloned());
        settings.user.roles.extend(self.roles.iter().cloned());
        for (name, value) in &self.attributes {
            settings
                .user
                .attributes
                .entry(name.clone())
                .or_default()
                .push(value.clone());
        }
        settings.logging.json |= self.json_logs;
    }
}

fn parse_attribute(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got `{raw}`"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("attribute name is empty in `{raw}`"));
    }
    Ok((name.to_owned(), value.to_owned()))
}
