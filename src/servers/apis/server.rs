//! Logic to run the whitelist API server.
//!
//! It contains the `ApiServer` struct and its `Launcher`.
//!
//! The `ApiServer` struct is responsible for:
//!
//! - Starting and stopping the server.
//! - Keeping the state of the server: `running` or `stopped`.
//!
//! It is a state machine: the same launcher configuration is kept across
//! start/stop cycles, which is what the tests use to spin API instances up
//! and down. The production binary starts it once from the
//! [`whitelist_api`](crate::bootstrap::jobs::whitelist_api) job and only
//! stops it through the process shutdown signals.
use std::net::SocketAddr;
use std::sync::Arc;

use derive_more::Constructor;
use futures::future::BoxFuture;
use tokio::sync::oneshot::{Receiver, Sender};

use super::routes::router;
use crate::core::Whitelist;
use crate::servers::signals::{graceful_shutdown, Halted};

/// Error that can occur when starting or stopping the API server.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The spawned server task did not report the address it bound to.
    #[error("Could not receive the bound address from the server task")]
    MissingBoundAddress,

    /// The channel to send the shutdown signal to the server was closed.
    #[error("The halt channel of the server task was closed")]
    HaltChannelClosed,

    /// The server task failed to run to completion.
    #[error("The server task failed: {0}")]
    TaskFailed(String),
}

/// A whitelist API server when it is stopped.
pub struct Stopped {
    launcher: Launcher,
}

/// A whitelist API server when it is running.
pub struct Running {
    /// The address the server is listening on.
    pub binding: SocketAddr,
    pub halt_task: Sender<Halted>,
    pub task: tokio::task::JoinHandle<Launcher>,
}

/// A whitelist API server controller, parameterized over its state.
pub struct ApiServer<S> {
    pub state: S,
}

/// It knows how to bind the socket and launch the actual axum server.
#[derive(Constructor, Clone, Copy, Debug)]
pub struct Launcher {
    pub bind_to: SocketAddr,
    pub cors_enabled: bool,
}

impl Launcher {
    /// It binds the socket, reports the bound address through `tx_start`
    /// and returns the future running the server until a halt signal
    /// arrives on `rx_halt`.
    ///
    /// # Panics
    ///
    /// Will panic if it cannot bind to the socket address, or if the
    /// started server cannot be reported back to the caller.
    fn start(&self, whitelist: Arc<Whitelist>, tx_start: Sender<SocketAddr>, rx_halt: Receiver<Halted>) -> BoxFuture<'static, ()> {
        let listener = std::net::TcpListener::bind(self.bind_to).expect("it should bind the API server socket address");
        let binding = listener.local_addr().expect("it should get the local address of the bound socket");

        let handle = axum_server::Handle::new();

        tokio::task::spawn(graceful_shutdown(
            handle.clone(),
            rx_halt,
            format!("Halting the whitelist API server on socket address: {binding}"),
        ));

        let app = router(whitelist, self.cors_enabled);

        let running = Box::pin(async move {
            axum_server::from_tcp(listener)
                .handle(handle)
                .serve(app.into_make_service())
                .await
                .expect("the whitelist API server should keep running");
        });

        tx_start
            .send(binding)
            .expect("the owner of the started server should not drop the start channel");

        running
    }
}

impl ApiServer<Stopped> {
    #[must_use]
    pub fn new(launcher: Launcher) -> Self {
        Self {
            state: Stopped { launcher },
        }
    }

    /// It starts the server and returns an `ApiServer` controller in
    /// `running` state.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the spawned server task does not report the
    /// address it bound to.
    pub async fn start(self, whitelist: Arc<Whitelist>) -> Result<ApiServer<Running>, Error> {
        let (tx_start, rx_start) = tokio::sync::oneshot::channel::<SocketAddr>();
        let (tx_halt, rx_halt) = tokio::sync::oneshot::channel::<Halted>();

        let launcher = self.state.launcher;

        let task = tokio::spawn(async move {
            let server = launcher.start(whitelist, tx_start, rx_halt);

            server.await;

            launcher
        });

        let binding = rx_start.await.map_err(|_| Error::MissingBoundAddress)?;

        Ok(ApiServer {
            state: Running {
                binding,
                halt_task: tx_halt,
                task,
            },
        })
    }
}

impl ApiServer<Running> {
    /// It stops the server and returns an `ApiServer` controller in
    /// `stopped` state.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the channel for the halt signal was closed, or
    /// if the server task did not run to completion.
    pub async fn stop(self) -> Result<ApiServer<Stopped>, Error> {
        self.state
            .halt_task
            .send(Halted::Normal)
            .map_err(|_| Error::HaltChannelClosed)?;

        let launcher = self.state.task.await.map_err(|e| Error::TaskFailed(e.to_string()))?;

        Ok(ApiServer {
            state: Stopped { launcher },
        })
    }
}
