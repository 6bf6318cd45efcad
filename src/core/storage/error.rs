//! Errors returned by the content store drivers.
use std::panic::Location;

/// Error returned by a [`Storage`](crate::core::storage::Storage)
/// implementation.
///
/// `Conflict` is the only variant handlers treat specially: it means the
/// version token was rejected because another writer changed the document
/// between this request's read and its write. Everything else is an
/// infrastructure failure.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client for the store could not be constructed.
    #[error("Failed to build the content store client: {source}")]
    ClientBuild { source: reqwest::Error },

    /// The configured coordinates do not form a valid store location.
    #[error("The configured store coordinates do not form a valid URL, {location}")]
    InvalidCoordinates { location: &'static Location<'static> },

    /// The configured credential cannot be sent as a request header.
    #[error("The configured store token is not a valid header value, {location}")]
    InvalidCredential { location: &'static Location<'static> },

    /// The request to the store failed in transit.
    #[error("The content store request failed: {source}")]
    Request {
        #[from]
        source: reqwest::Error,
    },

    /// The store answered with a status this driver does not expect.
    #[error("The content store returned an unexpected {status} status, {location}")]
    UnexpectedResponse {
        status: reqwest::StatusCode,
        location: &'static Location<'static>,
    },

    /// The stored file content is not valid base64.
    #[error("The stored content is not valid base64: {source}")]
    MalformedContent { source: base64::DecodeError },

    /// The stored file decodes but is not a valid whitelist document.
    #[error("The stored whitelist is not a valid JSON document: {source}")]
    MalformedDocument { source: serde_json::Error },

    /// The store rejected the version token: someone else changed the
    /// document since it was read.
    #[error("The version token no longer matches the stored document, {location}")]
    Conflict { location: &'static Location<'static> },
}

impl Error {
    #[track_caller]
    #[must_use]
    pub fn invalid_coordinates() -> Self {
        Self::InvalidCoordinates {
            location: Location::caller(),
        }
    }

    #[track_caller]
    #[must_use]
    pub fn invalid_credential() -> Self {
        Self::InvalidCredential {
            location: Location::caller(),
        }
    }

    #[track_caller]
    #[must_use]
    pub fn unexpected_response(status: reqwest::StatusCode) -> Self {
        Self::UnexpectedResponse {
            status,
            location: Location::caller(),
        }
    }

    #[track_caller]
    #[must_use]
    pub fn conflict() -> Self {
        Self::Conflict {
            location: Location::caller(),
        }
    }
}
