#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests against a mock external authentication service.
//!
//! These tests verify that:
//! 1. Exactly one JSON POST with the user payload is sent per evaluation
//! 2. Response statuses map to the expected outcomes
//! 3. Timeouts and refused connections become internal errors

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use external_authn_sdk::{AuthOutcome, ExternalAuthNClient, FlowStatus, UserProfile};
use http_external_authn_plugin::{
    AuthConfig, ExternalAuthNLocalClient, HttpExternalAuthNPluginConfig, Service,
};
use httpmock::prelude::*;
use serde_json::json;

fn service() -> Service {
    Service::from_config(&HttpExternalAuthNPluginConfig::default())
}

fn alice() -> UserProfile {
    UserProfile::new("alice")
        .with_group("admins")
        .with_role("viewer")
        .with_attribute("dept", ["eng"])
}

fn config_for(server: &MockServer, timeout_ms: u64) -> AuthConfig {
    AuthConfig::new(
        &server.url("/auth"),
        Some(Duration::from_millis(timeout_ms)),
    )
}

fn respond_with(server: &MockServer, status: u16) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(POST).path("/auth");
        then.status(status);
    })
}

#[test]
fn posts_user_payload_as_json_once() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/auth")
            .header("content-type", "application/json")
            .json_body(json!({
                "groups": ["admins"],
                "roles": ["viewer"],
                "attributes": {"dept": "eng"}
            }));
        then.status(200);
    });

    let outcome = service().evaluate(&alice(), &config_for(&server, 5000));

    mock.assert();
    assert_eq!(outcome, AuthOutcome::Success);
}

#[test]
fn ok_within_timeout_is_success() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/auth");
        then.status(200).delay(Duration::from_millis(100));
    });

    let outcome = service().evaluate(&alice(), &config_for(&server, 5000));

    mock.assert();
    assert_eq!(outcome, AuthOutcome::Success);
}

#[test]
fn unauthorized_is_access_denied() {
    let server = MockServer::start();
    let mock = respond_with(&server, 401);

    let outcome = service().evaluate(&alice(), &config_for(&server, 5000));

    mock.assert();
    assert_eq!(outcome, AuthOutcome::access_denied());
}

#[test]
fn forbidden_is_access_denied_with_message() {
    let server = MockServer::start();
    let mock = respond_with(&server, 403);

    let outcome = service().evaluate(&alice(), &config_for(&server, 5000));

    mock.assert();
    assert_eq!(outcome.message(), Some("access denied"));
    assert_eq!(outcome.flow_status(), FlowStatus::Failed);
}

#[test]
fn server_errors_are_generic_failures() {
    for status in [404, 500, 502] {
        let server = MockServer::start();
        let mock = respond_with(&server, status);

        let outcome = service().evaluate(&alice(), &config_for(&server, 5000));

        mock.assert();
        assert_eq!(outcome, AuthOutcome::generic_failure(), "status {status}");
    }
}

#[test]
fn redirect_is_not_followed() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/auth");
        then.status(302).header("location", server.url("/elsewhere"));
    });
    // Following the redirect would turn the step into a success.
    let _target = server.mock(|when, then| {
        when.path("/elsewhere");
        then.status(200);
    });

    let outcome = service().evaluate(&alice(), &config_for(&server, 5000));

    mock.assert();
    assert_eq!(outcome, AuthOutcome::generic_failure());
}

#[test]
fn timeout_is_internal_error() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(POST).path("/auth");
        then.status(200).delay(Duration::from_secs(2));
    });

    let outcome = service().evaluate(&alice(), &config_for(&server, 100));

    assert_eq!(outcome, AuthOutcome::InternalError);
    assert_eq!(outcome.flow_status(), FlowStatus::Failed);
}

#[test]
fn refused_connection_is_internal_error() {
    // Port 1 (tcpmux) is not served on test hosts.
    let config = AuthConfig::new("http://127.0.0.1:1/auth", Some(Duration::from_secs(2)));

    let outcome = service().evaluate(&alice(), &config);

    assert_eq!(outcome, AuthOutcome::InternalError);
}

#[tokio::test]
async fn async_client_uses_step_config_map() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/auth");
            then.status(403);
        })
        .await;

    let client = ExternalAuthNLocalClient::new(Arc::new(service()));
    let step_config = HashMap::from([
        ("external-url".to_owned(), server.url("/auth")),
        ("external-timeout".to_owned(), "5000".to_owned()),
    ]);

    let outcome = client.evaluate(&alice(), &step_config).await.unwrap();

    mock.assert_async().await;
    assert_eq!(outcome, AuthOutcome::access_denied());
}
