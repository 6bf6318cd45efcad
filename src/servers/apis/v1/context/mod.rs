//! The contexts of the v1 API.
//!
//! Each context groups the endpoints for one concern:
//!
//! - [`whitelist`]: the whitelist operations.
//! - [`health_check`]: the container health probe.
pub mod health_check;
pub mod whitelist;
