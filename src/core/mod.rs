//! The domain layer of the whitelist service.
//!
//! Its core structure is the [`Whitelist`] service. It validates and
//! executes the whitelist operations against the document held by the
//! remote content store:
//!
//! - **Reads**: `check` and `hwid_exists` (is this hardware ID bound to any
//!   entry?) and `get_hwid` (which hardware ID is bound to this Discord
//!   ID?).
//! - **Mutations**: `add`, `reset` and `remove`. Each one is a full
//!   read-modify-write cycle: load the document and its version token,
//!   validate the preconditions, apply the change and write the whole
//!   document back conditioned on the token.
//!
//! The service keeps no state between calls; the store is the single
//! source of truth. Two concurrent mutations racing on the document are
//! arbitrated entirely by the store's version token check: the second
//! writer gets a [`Conflict`](storage::error::Error::Conflict) instead of
//! silently clobbering the first writer's change. The service does not
//! retry on conflict; the caller owns the retry decision.
//!
//! The document invariant that no two entries are bound to the same
//! hardware ID is enforced here, by scanning current values before `add`
//! and `reset`.
//!
//! > **NOTICE**: the `Whitelist` service is not responsible for handling
//! the network layer. It is used by the API handlers in
//! [`servers::apis`](crate::servers::apis), which map its errors onto HTTP
//! responses.
pub mod document;
pub mod error;
pub mod storage;

use std::sync::Arc;

use self::document::{DiscordId, Document, Hwid};
use self::error::Error;
use self::storage::Storage;

/// The domain layer whitelist service.
pub struct Whitelist {
    /// A content store driver implementation:
    /// [`Github`](crate::core::storage::github::Github).
    storage: Arc<dyn Storage>,
}

impl Whitelist {
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Returns `true` if `hwid` is bound to any whitelist entry. It serves
    /// both the `check` and the `hwid_exists` operations.
    ///
    /// # Errors
    ///
    /// Will return a `storage` error if the document cannot be loaded.
    pub async fn is_hwid_whitelisted(&self, hwid: &Hwid) -> Result<bool, Error> {
        let (document, _) = self.storage.load().await?;

        Ok(document.binds_hwid(hwid))
    }

    /// Returns the hardware ID bound to `discord_id`, or `None` when the
    /// Discord ID has no entry.
    ///
    /// # Errors
    ///
    /// Will return a `storage` error if the document cannot be loaded.
    pub async fn find_hwid(&self, discord_id: &DiscordId) -> Result<Option<Hwid>, Error> {
        let (document, _) = self.storage.load().await?;

        Ok(document.hwid_for(discord_id).cloned())
    }

    /// It whitelists `discord_id` with `hwid`.
    ///
    /// # Errors
    ///
    /// Will return:
    ///
    /// - `AlreadyWhitelisted` if `discord_id` already has an entry.
    /// - `HwidAlreadyUsed` if `hwid` is already bound to any entry.
    /// - A `storage` error if the document cannot be loaded or saved.
    pub async fn add_to_whitelist(&self, discord_id: DiscordId, hwid: Hwid) -> Result<(), Error> {
        let (mut document, version) = self.storage.load().await?;

        if document.contains(&discord_id) {
            return Err(Error::AlreadyWhitelisted { discord_id });
        }

        if document.binds_hwid(&hwid) {
            return Err(Error::HwidAlreadyUsed);
        }

        document.bind(discord_id, hwid);

        self.storage.save(document, version).await?;

        Ok(())
    }

    /// It rebinds the entry of `discord_id` to `new_hwid`, in place.
    ///
    /// Resetting to the currently bound value is allowed: the entry that
    /// binds `new_hwid` being the requester's own is not a collision.
    ///
    /// # Errors
    ///
    /// Will return:
    ///
    /// - `NotWhitelisted` if `discord_id` has no entry.
    /// - `NewHwidAlreadyUsed` if `new_hwid` is bound to a different entry.
    /// - A `storage` error if the document cannot be loaded or saved.
    pub async fn reset_hwid(&self, discord_id: DiscordId, new_hwid: Hwid) -> Result<(), Error> {
        let (mut document, version) = self.storage.load().await?;

        let Some(current) = document.hwid_for(&discord_id) else {
            return Err(Error::NotWhitelisted { discord_id });
        };

        if *current != new_hwid && document.binds_hwid(&new_hwid) {
            return Err(Error::NewHwidAlreadyUsed);
        }

        document.bind(discord_id, new_hwid);

        self.storage.save(document, version).await?;

        Ok(())
    }

    /// It removes the entry of `discord_id` from the whitelist.
    ///
    /// # Errors
    ///
    /// Will return:
    ///
    /// - `NotFound` if `discord_id` has no entry.
    /// - A `storage` error if the document cannot be loaded or saved.
    pub async fn remove_from_whitelist(&self, discord_id: DiscordId) -> Result<(), Error> {
        let (mut document, version) = self.storage.load().await?;

        if document.unbind(&discord_id).is_none() {
            return Err(Error::NotFound { discord_id });
        }

        self.storage.save(document, version).await?;

        Ok(())
    }
}
