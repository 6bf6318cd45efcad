//! API routes for the
//! [`whitelist`](crate::servers::apis::v1::context::whitelist) API context.
//!
//! - `GET /whitelist?action=check|get_hwid|hwid_exists&...`
//! - `POST /whitelist` with a `{action, ...}` JSON body
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::whitelist).
use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use super::handlers::{method_not_allowed_handler, mutation_handler, query_handler};
use crate::core::Whitelist;

/// It adds the routes to the router for the
/// [`whitelist`](crate::servers::apis::v1::context::whitelist) API context.
pub fn add(prefix: &str, router: Router, whitelist: Arc<Whitelist>) -> Router {
    router.route(
        &format!("{prefix}/whitelist"),
        get(query_handler)
            .post(mutation_handler)
            .fallback(method_not_allowed_handler)
            .with_state(whitelist),
    )
}
