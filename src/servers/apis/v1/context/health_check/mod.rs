//! Health check API context.
//!
//! Used by the container infrastructure to check the service is running.
//!
//! # Endpoints
//!
//! - [Health check](#health-check)
//!
//! # Health check
//!
//! `GET /health_check`
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:3000/api/health_check"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "status": "Ok"
//! }
//! ```
pub mod handlers;
pub mod resources;
