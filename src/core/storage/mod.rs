//! The persistence module for the whitelist document.
//!
//! The document lives in a remote content store, accessed through one
//! [`Storage`] trait. There is currently one implementation of the trait
//! (one driver):
//!
//! - [`Github`](crate::core::storage::github::Github): a file in a GitHub
//!   repository, read and written through the contents API.
//!
//! The store is the sole durable owner of the document. Every request
//! fetches the document fresh together with a [`VersionToken`] and, for
//! mutations, writes the whole document back conditioned on that token.
//! Nothing is cached between requests.
pub mod error;
pub mod github;

use std::fmt;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use self::error::Error;
use crate::core::document::Document;

/// The opaque value identifying the stored revision of the document file.
///
/// The remote store returns it on every read and rejects a conditional
/// write whose token no longer matches the current revision. A token is
/// only valid for the write that directly follows the read that produced
/// it; tokens are never kept across requests.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct VersionToken(String);

impl VersionToken {
    pub fn new<T: Into<String>>(token: T) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The persistence trait. It contains the two operations the service
/// performs against the remote content store.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait Storage: Sync + Send {
    /// It fetches the current document and its version token.
    ///
    /// A document that does not exist remotely yet is not an error: it
    /// loads as an empty document with no version token (the first-use
    /// state, before any entry has been whitelisted).
    ///
    /// # Errors
    ///
    /// Will return `Err` if the store cannot be reached or the stored
    /// content cannot be decoded.
    async fn load(&self) -> Result<(Document, Option<VersionToken>), Error>;

    /// It persists the whole document as the new file state.
    ///
    /// The write is conditioned on `version` when present; passing `None`
    /// signals that the file is being created. A stale token makes the
    /// store reject the write with [`Error::Conflict`].
    ///
    /// # Errors
    ///
    /// Will return `Err` if the store cannot be reached or rejects the
    /// write.
    async fn save(&self, document: Document, version: Option<VersionToken>) -> Result<(), Error>;
}
