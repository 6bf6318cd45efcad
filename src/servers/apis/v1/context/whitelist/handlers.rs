//! API handlers for the
//! [`whitelist`](crate::servers::apis::v1::context::whitelist) API context.
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Json, Response};

use super::forms::{ActionParams, AddForm, MutationRequest, RemoveForm, ResetForm};
use super::resources::{BoundHwid, HwidExists, WhitelistedStatus};
use super::responses::operation_failed_response;
use crate::core::document::{DiscordId, Hwid};
use crate::core::Whitelist;
use crate::servers::apis::v1::responses::{
    invalid_action_response, method_not_allowed_response, rejected_response, success_response,
};

/// It handles the read requests: `check`, `get_hwid` and `hwid_exists`,
/// dispatched on the `action` query parameter.
///
/// It returns:
///
/// - `200` with the resource of the requested action in json.
/// - `400` with an `Invalid action` reason when the action is missing or
///   not a read action.
/// - `500` when the whitelist document cannot be loaded.
///
/// A request missing the parameter its action looks up answers negatively
/// (`false` or `null`) instead of failing; the deployed launcher clients
/// rely on that.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::whitelist)
/// for more information about this endpoint.
pub async fn query_handler(State(whitelist): State<Arc<Whitelist>>, Query(params): Query<ActionParams>) -> Response {
    match params.action.as_deref() {
        Some("check") => check_handler(&whitelist, params.hwid.as_ref()).await,
        Some("get_hwid") => get_hwid_handler(&whitelist, params.discord_id.as_ref()).await,
        Some("hwid_exists") => hwid_exists_handler(&whitelist, params.hwid.as_ref()).await,
        _ => invalid_action_response(),
    }
}

async fn check_handler(whitelist: &Whitelist, hwid: Option<&Hwid>) -> Response {
    let Some(hwid) = hwid else {
        return Json(WhitelistedStatus { whitelisted: false }).into_response();
    };

    match whitelist.is_hwid_whitelisted(hwid).await {
        Ok(whitelisted) => Json(WhitelistedStatus { whitelisted }).into_response(),
        Err(e) => operation_failed_response(&e),
    }
}

async fn get_hwid_handler(whitelist: &Whitelist, discord_id: Option<&DiscordId>) -> Response {
    let Some(discord_id) = discord_id else {
        return Json(BoundHwid { hwid: None }).into_response();
    };

    match whitelist.find_hwid(discord_id).await {
        Ok(hwid) => Json(BoundHwid { hwid }).into_response(),
        Err(e) => operation_failed_response(&e),
    }
}

async fn hwid_exists_handler(whitelist: &Whitelist, hwid: Option<&Hwid>) -> Response {
    let Some(hwid) = hwid else {
        return Json(HwidExists { exists: false }).into_response();
    };

    match whitelist.is_hwid_whitelisted(hwid).await {
        Ok(exists) => Json(HwidExists { exists }).into_response(),
        Err(e) => operation_failed_response(&e),
    }
}

/// It handles the mutation requests: `add`, `reset` and `remove`,
/// dispatched on the `action` field of the JSON body.
///
/// It returns:
///
/// - `200` with `{"success": true}` when the mutation was applied and
///   persisted.
/// - `400` with a short reason for a malformed body, an unknown action or
///   a violated precondition.
/// - `409` when the content store rejected the version token.
/// - `500` when the whitelist document cannot be loaded or saved.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::whitelist)
/// for more information about this endpoint.
pub async fn mutation_handler(State(whitelist): State<Arc<Whitelist>>, body: String) -> Response {
    let request = match MutationRequest::from_body(&body) {
        Ok(request) => request,
        Err(e) => return rejected_response(&e.to_string()),
    };

    let result = match request {
        MutationRequest::Add(AddForm { discord_id, hwid }) => whitelist.add_to_whitelist(discord_id, hwid).await,
        MutationRequest::Reset(ResetForm { discord_id, new_hwid }) => whitelist.reset_hwid(discord_id, new_hwid).await,
        MutationRequest::Remove(RemoveForm { discord_id }) => whitelist.remove_from_whitelist(discord_id).await,
    };

    match result {
        Ok(()) => success_response(),
        Err(e) => operation_failed_response(&e),
    }
}

/// It answers any method the endpoint does not serve with a `405`.
pub async fn method_not_allowed_handler() -> Response {
    method_not_allowed_response()
}
