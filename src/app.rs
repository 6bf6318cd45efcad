//! Whitelist service application.
//!
//! The application is a container for the service jobs. It starts the
//! jobs the configuration enables and returns their handles so the main
//! process can wait for them during shutdown.
//!
//! Jobs:
//!
//! - Whitelist REST API: serves the whitelist operations; can be disabled
//!   in the configuration.
//!
//! Every job is a separate tokio task. The application keeps no state of
//! its own; each whitelist request is served against the remote content
//! store directly.
use std::sync::Arc;

use hwid_gate_configuration::Configuration;
use tokio::task::JoinHandle;

use crate::bootstrap::jobs::whitelist_api;
use crate::core;

/// It starts all the jobs the configuration enables.
pub async fn start(config: &Configuration, whitelist: Arc<core::Whitelist>) -> Vec<JoinHandle<()>> {
    let mut jobs: Vec<JoinHandle<()>> = Vec::new();

    // Start the whitelist REST API
    if config.http_api.enabled {
        if let Some(job) = whitelist_api::start_job(&config.http_api, whitelist.clone()).await {
            jobs.push(job);
        };
    }

    jobs
}
