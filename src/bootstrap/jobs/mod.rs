//! Application jobs: the long-running tasks started at boot.
//!
//! There is currently one job, the whitelist API server. Every job owns
//! its server and reports back a `JoinHandle` the application waits on
//! during shutdown.
pub mod whitelist_api;
