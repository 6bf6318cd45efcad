//! API responses for the
//! [`whitelist`](crate::servers::apis::v1::context::whitelist) API context.
use axum::response::Response;
use tracing::{error, warn};

use crate::core::error::Error;
use crate::core::storage;
use crate::servers::apis::v1::responses::{conflict_response, rejected_response, server_error_response};

/// It maps a failed whitelist operation onto its response.
///
/// Precondition violations become `400` responses carrying the reason
/// strings the deployed clients already match on. Store failures are split
/// into the `409` conflict case and the opaque `500`; both are logged here
/// with the detail that does not leave the server.
#[must_use]
pub fn operation_failed_response(error: &Error) -> Response {
    match error {
        Error::AlreadyWhitelisted { .. } => rejected_response("Already whitelisted"),
        Error::HwidAlreadyUsed => rejected_response("HWID used"),
        Error::NotWhitelisted { .. } => rejected_response("Not whitelisted"),
        Error::NewHwidAlreadyUsed => rejected_response("New HWID already used"),
        Error::NotFound { .. } => rejected_response("Not found"),
        Error::Storage { source } => store_failure_response(source),
    }
}

/// It maps a content store failure onto its response, logging the detail.
#[must_use]
pub fn store_failure_response(source: &storage::error::Error) -> Response {
    match source {
        storage::error::Error::Conflict { .. } => {
            warn!(target: "API", "whitelist write rejected by the content store: {source}");

            conflict_response()
        }
        _ => {
            error!(target: "API", "whitelist content store failure: {source}");

            server_error_response()
        }
    }
}
