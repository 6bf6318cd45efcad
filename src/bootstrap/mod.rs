//! Setup for the main whitelist service application.
//!
//! The [`app::setup`](crate::bootstrap::app::setup) function builds the
//! configuration, initializes the logging and constructs the domain
//! service. The [`jobs`](crate::bootstrap::jobs) module starts the
//! long-running tasks.
pub mod app;
pub mod jobs;
pub mod logging;
