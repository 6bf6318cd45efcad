//! An in-memory content store for the integration tests.
//!
//! It honors the version-token protocol the way the real store does: every
//! save bumps the revision, and a save conditioned on a stale token is
//! rejected with a conflict. Tests can also force the next calls to fail,
//! which is how the contract tests exercise the conflict and outage
//! responses without a real remote store.
use std::panic::Location;

use async_trait::async_trait;
use hwid_gate::core::document::Document;
use hwid_gate::core::storage::error::Error;
use hwid_gate::core::storage::{Storage, VersionToken};
use reqwest::StatusCode;
use tokio::sync::Mutex;

#[derive(Clone, Copy, Debug)]
enum Failure {
    Conflict,
    Outage,
}

#[derive(Default)]
pub struct InMemoryStore {
    /// `None` until the first save creates the file.
    state: Mutex<Option<(Document, u64)>>,
    failure: Mutex<Option<Failure>>,
}

impl InMemoryStore {
    /// It makes every following save fail as if the store had rejected
    /// the version token.
    pub async fn force_conflict(&self) {
        *self.failure.lock().await = Some(Failure::Conflict);
    }

    /// It makes every following call fail as if the store were down.
    pub async fn force_outage(&self) {
        *self.failure.lock().await = Some(Failure::Outage);
    }

    /// It preloads the stored document, as if it had been committed
    /// earlier.
    pub async fn seed(&self, document: Document) {
        let mut state = self.state.lock().await;
        let revision = state.as_ref().map_or(0, |(_, revision)| revision + 1);
        *state = Some((document, revision));
    }

    /// A snapshot of the stored document, for asserting on persisted
    /// state.
    pub async fn document(&self) -> Document {
        self.state
            .lock()
            .await
            .as_ref()
            .map(|(document, _)| document.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Storage for InMemoryStore {
    async fn load(&self) -> Result<(Document, Option<VersionToken>), Error> {
        if let Some(Failure::Outage) = *self.failure.lock().await {
            return Err(Error::UnexpectedResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                location: Location::caller(),
            });
        }

        match &*self.state.lock().await {
            None => Ok((Document::default(), None)),
            Some((document, revision)) => Ok((document.clone(), Some(VersionToken::new(revision.to_string())))),
        }
    }

    async fn save(&self, document: Document, version: Option<VersionToken>) -> Result<(), Error> {
        match *self.failure.lock().await {
            Some(Failure::Conflict) => {
                return Err(Error::Conflict {
                    location: Location::caller(),
                })
            }
            Some(Failure::Outage) => {
                return Err(Error::UnexpectedResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    location: Location::caller(),
                })
            }
            None => {}
        }

        let mut state = self.state.lock().await;

        let current = state.as_ref().map(|(_, revision)| revision.to_string());
        let offered = version.map(|token| token.as_str().to_owned());

        if offered != current {
            return Err(Error::Conflict {
                location: Location::caller(),
            });
        }

        let revision = state.as_ref().map_or(0, |(_, revision)| revision + 1);
        *state = Some((document, revision));

        Ok(())
    }
}
