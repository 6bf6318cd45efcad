use hwid_gate::{app, bootstrap};
use tracing::info;

#[tokio::main]
async fn main() {
    let (config, whitelist) = bootstrap::app::setup();

    let jobs = app::start(&config, whitelist).await;

    // handle the signals
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("hwid-gate shutting down..");

            // Await for all jobs to shutdown
            futures::future::join_all(jobs).await;
            info!("hwid-gate successfully shutdown.");
        }
    }
}
