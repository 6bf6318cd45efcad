//! Whitelist API job starter.
//!
//! The [`start_job`](crate::bootstrap::jobs::whitelist_api::start_job)
//! function starts the whitelist REST API server.
//!
//! The function spawns a new asynchronous task which is the "**launcher**".
//! The "**launcher**" starts the actual server and waits for it until a
//! shutdown signal arrives. `start_job` itself only returns once the
//! launcher has reported the address the server is listening on.
//!
//! Refer to the [`hwid-gate-configuration`](hwid_gate_configuration)
//! documentation for the API configuration options.
use std::net::SocketAddr;
use std::sync::Arc;

use hwid_gate_configuration::HttpApi;
use tokio::task::JoinHandle;
use tracing::info;

use crate::core::Whitelist;
use crate::servers::apis::server::{ApiServer, Launcher};

/// This function starts a new whitelist API server with the provided
/// configuration, or no server at all when the API is disabled.
pub async fn start_job(config: &HttpApi, whitelist: Arc<Whitelist>) -> Option<JoinHandle<()>> {
    if config.enabled {
        Some(start_server(config.bind_address, config.cors_enabled, whitelist).await)
    } else {
        info!("Note: Not loading the whitelist API service, not enabled in configuration.");
        None
    }
}

/// # Panics
///
/// It would panic if unable to start the API server or if the server task
/// fails.
async fn start_server(socket: SocketAddr, cors_enabled: bool, whitelist: Arc<Whitelist>) -> JoinHandle<()> {
    let server = ApiServer::new(Launcher::new(socket, cors_enabled))
        .start(whitelist)
        .await
        .expect("it should be able to start the whitelist API server");

    info!("Whitelist API server listening on http://{}", server.state.binding);

    tokio::spawn(async move {
        assert!(!server.state.halt_task.is_closed(), "Halt channel should be open");
        server.state.task.await.expect("it should close the whitelist API service");
    })
}
