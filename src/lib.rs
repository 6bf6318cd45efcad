//! `hwid-gate` is an HTTP service managing a whitelist of Discord user ID
//! to hardware ID bindings.
//!
//! The whitelist is a single JSON document persisted as a file in a GitHub
//! repository, read and written through the contents API. Every request
//! loads the document fresh; mutations write it back conditioned on the
//! blob SHA obtained at load time, so concurrent writers cannot silently
//! overwrite each other.
//!
//! The crate is organized in three layers:
//!
//! - [`core`]: the domain layer. The [`Whitelist`](core::Whitelist)
//!   service with its operations, the document model and the content
//!   store drivers.
//! - [`servers`]: the network layer. The axum REST API and the server
//!   lifecycle.
//! - [`app`] and [`bootstrap`]: the application layer. Configuration
//!   loading, logging setup and job startup.
//!
//! Refer to [`servers::apis`] for the HTTP endpoint documentation and to
//! [`hwid-gate-configuration`](hwid_gate_configuration) for the
//! configuration options.
pub mod app;
pub mod bootstrap;
pub mod core;
pub mod servers;
