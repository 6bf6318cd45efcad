//! The first version of the whitelist REST API.
//!
//! The API has two groups of endpoints (contexts):
//!
//! - [`whitelist`](crate::servers::apis::v1::context::whitelist): the
//!   whitelist operations.
//! - [`health_check`](crate::servers::apis::v1::context::health_check):
//!   the container health probe.
pub mod context;
pub mod responses;
pub mod routes;
