//! The whitelist REST API with all its versions.
//!
//! Endpoints for the latest API: [v1].
//!
//! # Table of contents
//!
//! - [Configuration](#configuration)
//! - [Versioning](#versioning)
//! - [Endpoints](#endpoints)
//!
//! # Configuration
//!
//! The configuration file has a
//! [`[http_api]`](hwid_gate_configuration::HttpApi) section that can be
//! used to enable the API and to change the socket it binds to:
//!
//! ```toml
//! [http_api]
//! enabled = true
//! bind_address = "127.0.0.1:3000"
//! cors_enabled = false
//! ```
//!
//! When you run the service with the API enabled, you will see the
//! following message:
//!
//! ```text
//! Loading configuration from config file ./config.toml ...
//! 2024-07-02T12:19:24.963054069+01:00 INFO hwid_gate::bootstrap::jobs::whitelist_api: Whitelist API server listening on http://127.0.0.1:3000
//! ```
//!
//! You can test the API using `curl`:
//!
//! ```bash
//! $ curl -s "http://127.0.0.1:3000/api/v1/whitelist?action=check&hwid=A1B2C3D4"
//! ```
//!
//! The response will be a JSON object. For example:
//!
//! ```json
//! {
//!   "whitelisted": false
//! }
//! ```
//!
//! # Versioning
//!
//! The API is versioned and each version has its own module. The API
//! server runs all the API versions on the same server using the same
//! port. Currently there is only one API version: [v1].
//!
//! The endpoints are also mounted without the version prefix
//! (`/api/whitelist`) because the deployed Discord bot and launcher builds
//! predate the versioned paths.
//!
//! # Endpoints
//!
//! Refer to the [v1] module for the list of available API endpoints.
pub mod routes;
pub mod server;
pub mod v1;
