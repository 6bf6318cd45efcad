//! The whitelist document and its value types.
//!
//! The document is the single JSON object persisted in the remote content
//! store: a mapping from Discord user ID to the hardware ID authorized for
//! that user.
//!
//! ```json
//! {
//!   "123456789012345678": "A1B2C3D4",
//!   "234567890123456789": "E5F6A7B8"
//! }
//! ```
//!
//! Keys are unique by construction. The document-level invariant that no
//! two keys are bound to the same hardware ID is enforced by the
//! [`Whitelist`](crate::core::Whitelist) service, not by this type.
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A Discord user ID.
///
/// Stored and serialized as a string. Clients are not consistent about the
/// JSON type they send: the bot sends the ID as a string while some
/// launcher builds send the raw snowflake number, so deserialization
/// accepts both and normalizes to the decimal string form.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
pub struct DiscordId(String);

impl DiscordId {
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(id.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for DiscordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for DiscordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for DiscordId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DiscordId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DiscordIdVisitor)
    }
}

struct DiscordIdVisitor;

impl serde::de::Visitor<'_> for DiscordIdVisitor {
    type Value = DiscordId;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a Discord user ID as a string or an integer")
    }

    fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(DiscordId::new(value))
    }

    fn visit_string<E: serde::de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(DiscordId(value))
    }

    fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(DiscordId(value.to_string()))
    }

    fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(DiscordId(value.to_string()))
    }
}

/// A hardware ID: an opaque string identifying a client machine. One
/// whitelist slot is bound to exactly one machine through it.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
#[serde(transparent)]
pub struct Hwid(String);

impl Hwid {
    #[must_use]
    pub fn new(hwid: &str) -> Self {
        Self(hwid.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Hwid {
    fn from(hwid: String) -> Self {
        Self(hwid)
    }
}

impl fmt::Display for Hwid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The whitelist document: the mapping from Discord ID to hardware ID.
///
/// The ordered map keeps the serialized file stable, so saving the same
/// logical content twice produces byte-identical commits.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
#[serde(transparent)]
pub struct Document(BTreeMap<DiscordId, Hwid>);

impl Document {
    /// Returns `true` if `discord_id` has a whitelist entry.
    #[must_use]
    pub fn contains(&self, discord_id: &DiscordId) -> bool {
        self.0.contains_key(discord_id)
    }

    /// Returns the hardware ID bound to `discord_id`, if any.
    #[must_use]
    pub fn hwid_for(&self, discord_id: &DiscordId) -> Option<&Hwid> {
        self.0.get(discord_id)
    }

    /// Returns `true` if any entry binds `hwid`. Scans all current values.
    #[must_use]
    pub fn binds_hwid(&self, hwid: &Hwid) -> bool {
        self.0.values().any(|bound| bound == hwid)
    }

    /// Binds `hwid` to `discord_id`, replacing a previous binding for the
    /// same Discord ID.
    pub fn bind(&mut self, discord_id: DiscordId, hwid: Hwid) {
        self.0.insert(discord_id, hwid);
    }

    /// Removes the entry for `discord_id`, returning the hardware ID that
    /// was bound to it.
    pub fn unbind(&mut self, discord_id: &DiscordId) -> Option<Hwid> {
        self.0.remove(discord_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
