//! Request parameters and forms for the
//! [`whitelist`](crate::servers::apis::v1::context::whitelist) API context.
use serde::Deserialize;
use serde_json::Value;

use crate::core::document::{DiscordId, Hwid};

/// The query parameters of the read endpoint. All fields are optional at
/// this level; the handler decides what a missing field means for the
/// requested action.
#[derive(Deserialize, Debug)]
pub struct ActionParams {
    pub action: Option<String>,
    pub discord_id: Option<DiscordId>,
    pub hwid: Option<Hwid>,
}

/// The form to whitelist a Discord ID.
#[derive(Deserialize, PartialEq, Eq, Debug)]
pub struct AddForm {
    pub discord_id: DiscordId,
    pub hwid: Hwid,
}

/// The form to rebind the hardware ID of a whitelisted Discord ID.
#[derive(Deserialize, PartialEq, Eq, Debug)]
pub struct ResetForm {
    pub discord_id: DiscordId,
    pub new_hwid: Hwid,
}

/// The form to remove a Discord ID from the whitelist.
#[derive(Deserialize, PartialEq, Eq, Debug)]
pub struct RemoveForm {
    pub discord_id: DiscordId,
}

/// A parsed mutation request: the `action` field of the body decides the
/// form the rest of the fields are read as.
#[derive(PartialEq, Eq, Debug)]
pub enum MutationRequest {
    Add(AddForm),
    Reset(ResetForm),
    Remove(RemoveForm),
}

/// Why a request body could not be parsed into a [`MutationRequest`].
///
/// The display text is the reason string reported to the caller.
#[derive(thiserror::Error, PartialEq, Eq, Debug)]
pub enum ParseError {
    #[error("Malformed JSON body")]
    MalformedBody,

    #[error("Invalid action")]
    UnknownAction,

    #[error("Invalid {action} request")]
    InvalidFields { action: &'static str },
}

impl MutationRequest {
    /// It parses a request body into a mutation request.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the body is not JSON, carries no recognized
    /// `action`, or misses the fields the action needs.
    pub fn from_body(body: &str) -> Result<Self, ParseError> {
        let value = unwrap_nested_json(body)?;

        let Some(action) = value.get("action").and_then(Value::as_str).map(ToOwned::to_owned) else {
            return Err(ParseError::UnknownAction);
        };

        match action.as_str() {
            "add" => serde_json::from_value(value)
                .map(Self::Add)
                .map_err(|_| ParseError::InvalidFields { action: "add" }),
            "reset" => serde_json::from_value(value)
                .map(Self::Reset)
                .map_err(|_| ParseError::InvalidFields { action: "reset" }),
            "remove" => serde_json::from_value(value)
                .map(Self::Remove)
                .map_err(|_| ParseError::InvalidFields { action: "remove" }),
            _ => Err(ParseError::UnknownAction),
        }
    }
}

/// Some clients serialize the payload twice, so the body arrives as a JSON
/// string containing the JSON object. Both encodings are accepted.
fn unwrap_nested_json(body: &str) -> Result<Value, ParseError> {
    let value: Value = serde_json::from_str(body).map_err(|_| ParseError::MalformedBody)?;

    if let Value::String(inner) = value {
        return serde_json::from_str(&inner).map_err(|_| ParseError::MalformedBody);
    }

    Ok(value)
}
