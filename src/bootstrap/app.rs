//! Setup for the application: configuration, logging and the domain
//! service.
use std::env;
use std::sync::Arc;

use hwid_gate_configuration::{Configuration, DEFAULT_CONFIG_TOML_PATH, ENV_VAR_CONFIG_TOML, ENV_VAR_CONFIG_TOML_PATH};

use crate::bootstrap;
use crate::core::storage::github::Github;
use crate::core::Whitelist;

/// It loads the configuration and builds the whitelist service from it.
#[must_use]
pub fn setup() -> (Arc<Configuration>, Arc<Whitelist>) {
    let configuration = Arc::new(initialize_configuration());
    let whitelist = initialize_with_configuration(&configuration);

    (configuration, whitelist)
}

/// It initializes logging and the whitelist service for an already loaded
/// configuration.
#[must_use]
pub fn initialize_with_configuration(configuration: &Arc<Configuration>) -> Arc<Whitelist> {
    initialize_logging(configuration);
    Arc::new(initialize_whitelist(configuration))
}

/// It loads the configuration from the environment or the configuration
/// file.
///
/// # Panics
///
/// Will panic if it can't load the configuration from either the
/// `HWID_GATE_CONFIG_TOML` env var content or the configuration file.
#[must_use]
fn initialize_configuration() -> Configuration {
    if let Ok(config_toml) = env::var(ENV_VAR_CONFIG_TOML) {
        println!("Loading configuration from environment variable {ENV_VAR_CONFIG_TOML} ...");
        Configuration::load_from_toml(&config_toml).expect("Invalid configuration in the environment variable.")
    } else {
        let config_path = env::var(ENV_VAR_CONFIG_TOML_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_TOML_PATH.to_owned());
        println!("Loading configuration from config file {config_path} ...");
        Configuration::load_from_file(&config_path).expect("Invalid configuration file.")
    }
}

/// It builds the whitelist service with the GitHub content store driver.
///
/// # Panics
///
/// Will panic if the `[store]` configuration section does not form valid
/// request parameters for the contents API.
#[must_use]
pub fn initialize_whitelist(config: &Arc<Configuration>) -> Whitelist {
    let storage = Github::new(&config.store).expect("Could not initialize the whitelist content store.");

    Whitelist::new(Arc::new(storage))
}

pub fn initialize_logging(config: &Arc<Configuration>) {
    bootstrap::logging::setup(config);
}
