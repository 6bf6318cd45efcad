//! Whitelist API context.
//!
//! This API context is responsible for handling all the requests related
//! to the HWID whitelist: the mapping from Discord user ID to the hardware
//! ID authorized for that user. The Discord bot manages entries through
//! the mutations; the game launcher checks hardware IDs on startup through
//! the reads.
//!
//! All operations go through a single endpoint, dispatched on the `action`
//! field: reads as `GET` query parameters, mutations as a `POST` JSON
//! body.
//!
//! # Endpoints
//!
//! - [Check a hardware ID](#check-a-hardware-id)
//! - [Get the hardware ID of a Discord ID](#get-the-hardware-id-of-a-discord-id)
//! - [Whitelist a Discord ID](#whitelist-a-discord-id)
//! - [Reset a hardware ID](#reset-a-hardware-id)
//! - [Remove a Discord ID](#remove-a-discord-id)
//!
//! # Check a hardware ID
//!
//! `GET /whitelist?action=check&hwid=...` (alias: `action=hwid_exists`)
//!
//! It answers whether the hardware ID is bound to any whitelist entry.
//!
//! **Query parameters**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `action` | string | `check` or `hwid_exists` | Yes | `check`
//! `hwid` | string | The hardware ID to look up | Yes | `A1B2C3D4`
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:3000/api/v1/whitelist?action=check&hwid=A1B2C3D4"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "whitelisted": true
//! }
//! ```
//!
//! The `hwid_exists` alias answers the same lookup as `{"exists": true}`.
//!
//! # Get the hardware ID of a Discord ID
//!
//! `GET /whitelist?action=get_hwid&discord_id=...`
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:3000/api/v1/whitelist?action=get_hwid&discord_id=123456789012345678"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "hwid": "A1B2C3D4"
//! }
//! ```
//!
//! `hwid` is `null` when the Discord ID has no entry.
//!
//! # Whitelist a Discord ID
//!
//! `POST /whitelist` with body `{"action": "add", "discord_id": "...", "hwid": "..."}`
//!
//! It creates the entry binding the hardware ID to the Discord ID. The
//! request is rejected with `400` when the Discord ID already has an entry
//! (`Already whitelisted`) or when the hardware ID is bound to any entry
//! (`HWID used`).
//!
//! **Example request**
//!
//! ```bash
//! curl -X POST "http://127.0.0.1:3000/api/v1/whitelist" \
//!      -H "Content-Type: application/json" \
//!      -d '{"action": "add", "discord_id": "123456789012345678", "hwid": "A1B2C3D4"}'
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "success": true
//! }
//! ```
//!
//! # Reset a hardware ID
//!
//! `POST /whitelist` with body `{"action": "reset", "discord_id": "...", "new_hwid": "..."}`
//!
//! It rebinds the entry of the Discord ID to a new hardware ID, in place.
//! The request is rejected with `400` when the Discord ID has no entry
//! (`Not whitelisted`) or when the new hardware ID is bound to a different
//! entry (`New HWID already used`). Resetting to the currently bound value
//! is allowed.
//!
//! # Remove a Discord ID
//!
//! `POST /whitelist` with body `{"action": "remove", "discord_id": "..."}`
//!
//! It deletes the entry of the Discord ID. The request is rejected with
//! `400` when there is no such entry (`Not found`).
//!
//! # Failure modes
//!
//! Shared by all mutations:
//!
//! - `409 {"error": "Conflict"}`: the content store rejected the write
//!   because another writer changed the document first. Retry the whole
//!   request to operate on the fresh document.
//! - `500 {"error": "Server error"}`: the content store failed. The cause
//!   is logged server-side and intentionally not reported to the caller.
pub mod forms;
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod routes;
