//! Route initialization for the v1 API.
use std::sync::Arc;

use axum::Router;

use super::context::whitelist;
use crate::core::Whitelist;

/// Add the routes for the v1 API.
///
/// > **NOTICE**: the endpoints without the `v1` prefix are kept for
/// backward compatibility with the deployed bot and launcher clients. New
/// consumers should use the `/api/v1/whitelist` endpoint.
pub fn add(prefix: &str, router: Router, whitelist_service: Arc<Whitelist>) -> Router {
    // Without `v1` prefix, for the clients deployed before versioning.
    let router = whitelist::routes::add(prefix, router, whitelist_service.clone());

    // With `v1` prefix
    let v1_prefix = format!("{prefix}/v1");
    whitelist::routes::add(&v1_prefix, router, whitelist_service)
}
