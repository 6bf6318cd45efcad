//! Common responses for the API v1 shared by all the contexts.
//!
//! Every body on the error paths has the same shape, a single reason
//! string:
//!
//! ```json
//! { "error": "Invalid action" }
//! ```
//!
//! Client errors carry a short machine-readable reason. Infrastructure
//! failures are reported as an opaque `Server error` with the detail kept
//! in the server logs.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

/// The body reported for a performed mutation.
#[derive(Serialize, Debug)]
pub struct Success {
    pub success: bool,
}

/// The body reported for every rejected or failed request.
#[derive(Serialize, Debug)]
pub struct Rejection<'a> {
    pub error: &'a str,
}

// OK responses

/// `200` response for a mutation that was applied and persisted.
#[must_use]
pub fn success_response() -> Response {
    (StatusCode::OK, Json(Success { success: true })).into_response()
}

// Error responses

/// `400` response with a short machine-readable reason.
#[must_use]
pub fn rejected_response(reason: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(Rejection { error: reason })).into_response()
}

/// `400` response when the request carries no recognizable action.
#[must_use]
pub fn invalid_action_response() -> Response {
    rejected_response("Invalid action")
}

/// `405` response for methods the endpoint does not serve.
#[must_use]
pub fn method_not_allowed_response() -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, Json(Rejection { error: "Method not allowed" })).into_response()
}

/// `409` response when the content store rejected the version token: a
/// concurrent writer won the race for the document.
#[must_use]
pub fn conflict_response() -> Response {
    (StatusCode::CONFLICT, Json(Rejection { error: "Conflict" })).into_response()
}

/// `500` response for any infrastructure failure. Opaque on purpose; the
/// detail only goes to the server logs.
#[must_use]
pub fn server_error_response() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(Rejection { error: "Server error" })).into_response()
}
