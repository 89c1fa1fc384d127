#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Command-line probe for the HTTP external `AuthN` plugin.
//!
//! Loads the plugin and step settings, runs one evaluation, and prints the
//! outcome as JSON on stdout. Logs go to stderr.

mod cli;
mod settings;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use external_authn_sdk::{AuthOutcome, FlowError, FlowStatus};
use http_external_authn_plugin::{AuthConfig, PROVIDER, Service};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::settings::LoggingSettings;

#[derive(Debug, Serialize)]
struct Report<'a> {
    flow_status: FlowStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    flow_error: Option<FlowError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_page_status: Option<u16>,
    #[serde(flatten)]
    outcome: &'a AuthOutcome,
}

impl<'a> Report<'a> {
    fn new(outcome: &'a AuthOutcome) -> Self {
        Self {
            flow_status: outcome.flow_status(),
            flow_error: outcome.flow_error(),
            error_page_status: outcome.error_page_status().map(|status| status.as_u16()),
            outcome,
        }
    }
}

fn init_logging(cfg: &LoggingSettings) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&cfg.level))?;
    let registry = tracing_subscriber::registry().with(filter);

    if cfg.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()?;
    }
    Ok(())
}

fn exit_code(status: FlowStatus) -> ExitCode {
    match status {
        FlowStatus::Success => ExitCode::SUCCESS,
        FlowStatus::Failed => ExitCode::from(1),
        FlowStatus::Attempted => ExitCode::from(2),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    if cli.describe {
        println!("{}", serde_json::to_string_pretty(&PROVIDER)?);
        return Ok(ExitCode::SUCCESS);
    }

    let mut settings =
        settings::load(cli.config.as_deref()).context("failed to load settings")?;
    cli.apply(&mut settings);
    init_logging(&settings.logging).context("failed to initialize logging")?;

    let service = Service::from_config(&settings.plugin);
    let step = AuthConfig::from_map(&settings.step);
    let outcome = service.evaluate(&settings.user, &step);
    info!(username = %settings.user.username, status = ?outcome.flow_status(), "Check finished");

    let report = serde_json::to_string_pretty(&Report::new(&outcome))?;
    println!("{report}");

    Ok(exit_code(outcome.flow_status()))
}
