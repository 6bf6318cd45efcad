//! API resources for the
//! [`whitelist`](crate::servers::apis::v1::context::whitelist) API context.
use serde::{Deserialize, Serialize};

use crate::core::document::Hwid;

/// The answer to the `check` action.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct WhitelistedStatus {
    pub whitelisted: bool,
}

/// The answer to the `get_hwid` action. `hwid` is `null` when the Discord
/// ID has no whitelist entry.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct BoundHwid {
    pub hwid: Option<Hwid>,
}

/// The answer to the `hwid_exists` action.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct HwidExists {
    pub exists: bool,
}
