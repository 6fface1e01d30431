//! Environment-driven configuration loading. These tests mutate process
//! environment variables, so they run serially.

use bfhl_service::config::{BfhlConfig, DEFAULT_GEMINI_API_BASE, DEFAULT_GEMINI_MODEL};
use secrecy::ExposeSecret;
use serial_test::serial;
use std::env;

const VARS: [&str; 7] = [
    "ENVIRONMENT",
    "PORT",
    "APP__PORT",
    "OFFICIAL_EMAIL",
    "GEMINI_API_KEY",
    "GEMINI_MODEL",
    "GEMINI_API_BASE",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn dev_defaults_apply_when_nothing_is_set() {
    clear_env();

    let config = BfhlConfig::load().expect("dev config should load");

    assert_eq!(config.common.port, 3000);
    assert_eq!(config.official_email, "dev@example.com");
    assert!(config.gemini.api_key.is_none());
    assert_eq!(config.gemini.model, DEFAULT_GEMINI_MODEL);
    assert_eq!(config.gemini.api_base, DEFAULT_GEMINI_API_BASE);
}

#[test]
#[serial]
fn bare_port_overrides_default() {
    clear_env();
    env::set_var("PORT", "8081");

    let config = BfhlConfig::load().expect("config should load");

    assert_eq!(config.common.port, 8081);
    clear_env();
}

#[test]
#[serial]
fn bare_port_wins_over_prefixed_port() {
    clear_env();
    env::set_var("APP__PORT", "9000");
    env::set_var("PORT", "8082");

    let config = BfhlConfig::load().expect("config should load");

    assert_eq!(config.common.port, 8082);
    clear_env();
}

#[test]
#[serial]
fn blank_api_key_is_absent_in_dev() {
    clear_env();
    env::set_var("GEMINI_API_KEY", "   ");

    let config = BfhlConfig::load().expect("dev config should load");

    assert!(config.gemini.api_key.is_none());
    clear_env();
}

#[test]
#[serial]
fn prod_requires_official_email() {
    clear_env();
    env::set_var("ENVIRONMENT", "prod");
    env::set_var("GEMINI_API_KEY", "prod-key");

    let err = BfhlConfig::load().unwrap_err();

    assert!(err.to_string().contains("OFFICIAL_EMAIL"), "{}", err);
    clear_env();
}

#[test]
#[serial]
fn prod_rejects_blank_api_key() {
    clear_env();
    env::set_var("ENVIRONMENT", "prod");
    env::set_var("OFFICIAL_EMAIL", "ops@example.com");
    env::set_var("GEMINI_API_KEY", "  ");

    let err = BfhlConfig::load().unwrap_err();

    assert!(err.to_string().contains("GEMINI_API_KEY"), "{}", err);
    clear_env();
}

#[test]
#[serial]
fn prod_loads_when_required_values_are_set() {
    clear_env();
    env::set_var("ENVIRONMENT", "prod");
    env::set_var("OFFICIAL_EMAIL", "ops@example.com");
    env::set_var("GEMINI_API_KEY", "prod-key");

    let config = BfhlConfig::load().expect("prod config should load");

    assert_eq!(config.official_email, "ops@example.com");
    assert_eq!(
        config.gemini.api_key.as_ref().map(|key| key.expose_secret().as_str()),
        Some("prod-key")
    );
    clear_env();
}
