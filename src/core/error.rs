//! Error returned by the core `Whitelist` service.
//!
//! Error | Context | Description
//! ---|---|---
//! `AlreadyWhitelisted` | `add` | The Discord ID already has a whitelist entry.
//! `HwidAlreadyUsed` | `add` | The hardware ID is already bound to some entry.
//! `NotWhitelisted` | `reset` | The Discord ID has no entry to reset.
//! `NewHwidAlreadyUsed` | `reset` | The new hardware ID is bound to a different Discord ID.
//! `NotFound` | `remove` | The Discord ID has no entry to remove.
//! `Storage` | any | The remote content store failed or rejected the write.
//!
//! The first five variants are precondition violations: the request is
//! rejected and the document is left untouched. Only `Storage` represents
//! an actual failure.
use crate::core::document::DiscordId;
use crate::core::storage;

/// Validation or storage error returned by the core `Whitelist` service.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("The Discord ID {discord_id} is already whitelisted")]
    AlreadyWhitelisted { discord_id: DiscordId },

    #[error("The hardware ID is already bound to another Discord ID")]
    HwidAlreadyUsed,

    #[error("The Discord ID {discord_id} is not whitelisted")]
    NotWhitelisted { discord_id: DiscordId },

    #[error("The new hardware ID is already bound to another Discord ID")]
    NewHwidAlreadyUsed,

    #[error("The Discord ID {discord_id} is not in the whitelist")]
    NotFound { discord_id: DiscordId },

    #[error("The whitelist document could not be read or written: {source}")]
    Storage {
        #[from]
        source: storage::error::Error,
    },
}
