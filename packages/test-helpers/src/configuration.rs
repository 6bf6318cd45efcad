//! Configuration fixtures for tests.
use hwid_gate_configuration::{Configuration, LogLevel};

/// Configuration for a test instance of the service. The API binds to an
/// ephemeral port so tests running in parallel do not collide, and logging
/// is off so test output stays readable.
#[must_use]
pub fn ephemeral() -> Configuration {
    let mut config = Configuration::default();

    // Change to `LogLevel::Debug` for tests debugging
    config.logging.log_level = LogLevel::Off;

    // Ephemeral socket address for the API
    config.http_api.enabled = true;
    config.http_api.bind_address = "127.0.0.1:0".parse().expect("hardcoded socket address should be valid");

    // The store is never reached in tests; they inject their own storage.
    config.store.owner = "testing".to_owned();
    config.store.repo = "whitelist-data".to_owned();

    config
}

/// Same as [`ephemeral()`], but with the permissive CORS layer enabled.
#[must_use]
pub fn ephemeral_with_cors() -> Configuration {
    let mut config = ephemeral();

    config.http_api.cors_enabled = true;

    config
}
