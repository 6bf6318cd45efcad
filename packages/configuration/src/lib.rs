//! Configuration data structures for the [hwid-gate](https://github.com/hwid-gate/hwid-gate)
//! whitelist service.
//!
//! The configuration is loaded from a [TOML](https://toml.io/en/) file
//! `config.toml` in the working directory or from an environment variable
//! with the same content as the file. Individual values can be overridden
//! with environment variables prefixed with `HWID_GATE_`, using `__` as the
//! section separator. For example:
//!
//! ```text
//! HWID_GATE_STORE__TOKEN=ghp_xxx
//! HWID_GATE_HTTP_API__BIND_ADDRESS=0.0.0.0:3000
//! ```
//!
//! Deployments that predate this service configured the storage location
//! with plain variables. Those are still recognized and map onto the
//! `[store]` section:
//!
//! | variable | maps to |
//! |---|---|
//! | `GITHUB_TOKEN` | `store.token` |
//! | `REPO_OWNER` | `store.owner` |
//! | `REPO_NAME` | `store.repo` |
//! | `WHITELIST_PATH` | `store.path` |
//!
//! When neither a file nor environment variables are provided, the default
//! configuration is used:
//!
//! ```toml
//! [logging]
//! log_level = "info"
//!
//! [http_api]
//! enabled = true
//! bind_address = "127.0.0.1:3000"
//! cors_enabled = false
//!
//! [store]
//! api_url = "https://api.github.com/"
//! owner = ""
//! repo = ""
//! path = "whitelist.json"
//! commit_message = "Update whitelist"
//! ```
pub mod http_api;
pub mod logging;
pub mod store;

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use self::http_api::HttpApi;
pub use self::logging::{LogLevel, Logging};
pub use self::store::Store;

// Environment variables

/// The whole `config.toml` file content. It has priority over the config
/// file, even if the file is not on the default path.
pub const ENV_VAR_CONFIG_TOML: &str = "HWID_GATE_CONFIG_TOML";

/// The `config.toml` file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "HWID_GATE_CONFIG_TOML_PATH";

/// The `config.toml` file location used when [`ENV_VAR_CONFIG_TOML_PATH`]
/// is unset.
pub const DEFAULT_CONFIG_TOML_PATH: &str = "./config.toml";

/// Core configuration for the whitelist service.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct Configuration {
    /// Logging configuration.
    #[serde(default)]
    pub logging: Logging,
    /// The HTTP API configuration.
    #[serde(default)]
    pub http_api: HttpApi,
    /// The remote content store holding the whitelist document.
    #[serde(default)]
    pub store: Store,
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration sources could not be merged or extracted.
    #[error("Failed processing the configuration: {source}")]
    ConfigError {
        #[from]
        source: figment::Error,
    },
}

impl Configuration {
    /// Loads the configuration from the configuration file, with environment
    /// variables taking precedence over file values.
    ///
    /// A missing file is not an error; the defaults (plus environment
    /// overrides) are used instead.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file or the environment contain values the
    /// configuration cannot be built from.
    pub fn load_from_file(path: &str) -> Result<Configuration, Error> {
        Self::extract(Figment::new().merge(Toml::file(path)))
    }

    /// Loads the configuration from a TOML string, with environment
    /// variables taking precedence over its values.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `toml` is not a valid configuration document.
    pub fn load_from_toml(toml: &str) -> Result<Configuration, Error> {
        Self::extract(Figment::new().merge(Toml::string(toml)))
    }

    fn extract(figment: Figment) -> Result<Configuration, Error> {
        let figment = figment
            .merge(Env::raw().only(&["GITHUB_TOKEN"]).map(|_| "store.token".into()).split("."))
            .merge(Env::raw().only(&["REPO_OWNER"]).map(|_| "store.owner".into()).split("."))
            .merge(Env::raw().only(&["REPO_NAME"]).map(|_| "store.repo".into()).split("."))
            .merge(Env::raw().only(&["WHITELIST_PATH"]).map(|_| "store.path".into()).split("."))
            .merge(Env::prefixed("HWID_GATE_").split("__"));

        let config: Configuration = figment.extract()?;

        Ok(config)
    }

    /// Encodes the configuration to TOML.
    ///
    /// # Panics
    ///
    /// Will panic if the configuration cannot be encoded, which cannot
    /// happen for values this type can hold.
    #[must_use]
    pub fn to_toml(&self) -> String {
        toml::to_string(self).expect("configuration should encode to TOML")
    }
}
