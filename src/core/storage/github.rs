//! GitHub driver for the whitelist document storage.
//!
//! The document is a single file in a GitHub repository, read and written
//! through the [contents API](https://docs.github.com/en/rest/repos/contents):
//!
//! - `GET /repos/{owner}/{repo}/contents/{path}` returns the file content
//!   base64-encoded together with the blob `sha`.
//! - `PUT /repos/{owner}/{repo}/contents/{path}` commits new content. The
//!   request carries the `sha` of the revision it is based on; GitHub
//!   rejects the write when that `sha` is no longer current, which is what
//!   makes the blob `sha` usable as the [`VersionToken`].
//!
//! The driver is constructed once per process from the `[store]`
//! configuration section and holds a single [`reqwest::Client`].
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hwid_gate_configuration::Store;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;

use super::error::Error;
use super::{Storage, VersionToken};
use crate::core::document::Document;

const GITHUB_API_VERSION_HEADER: &str = "x-github-api-version";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// The file metadata and content returned by the contents API on reads.
#[derive(Deserialize, Debug)]
struct ContentsResponse {
    /// Base64-encoded file content. GitHub inserts line breaks into the
    /// encoded text.
    content: String,
    /// The blob SHA of the current file revision.
    sha: String,
}

/// The request body for a contents API write.
#[derive(Serialize, Debug)]
struct UpdateRequest<'a> {
    message: &'a str,
    content: String,
    /// The blob SHA the write is conditioned on. Omitted to create the
    /// file.
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

/// [`Storage`] implementation backed by a file in a GitHub repository.
pub struct Github {
    client: reqwest::Client,
    contents_url: Url,
    commit_message: String,
}

impl Github {
    /// It instantiates the driver from the `[store]` configuration section.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configured coordinates do not form a valid
    /// contents API URL, or if the token cannot be sent as a request
    /// header.
    pub fn new(config: &Store) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(GITHUB_API_VERSION_HEADER, HeaderValue::from_static(GITHUB_API_VERSION));

        if let Some(token) = &config.token {
            let mut value =
                HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| Error::invalid_credential())?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|e| Error::ClientBuild { source: e })?;

        Ok(Self {
            client,
            contents_url: contents_url(config)?,
            commit_message: config.commit_message.clone(),
        })
    }
}

#[async_trait]
impl Storage for Github {
    async fn load(&self) -> Result<(Document, Option<VersionToken>), Error> {
        let response = self.client.get(self.contents_url.clone()).send().await?;

        match response.status() {
            // The file has not been created yet. First-use state, not an error.
            StatusCode::NOT_FOUND => Ok((Document::default(), None)),
            status if status.is_success() => {
                let contents: ContentsResponse = response.json().await?;

                let document = parse_document(&contents.content)?;

                Ok((document, Some(VersionToken::new(contents.sha))))
            }
            status => Err(Error::unexpected_response(status)),
        }
    }

    async fn save(&self, document: Document, version: Option<VersionToken>) -> Result<(), Error> {
        let body = UpdateRequest {
            message: &self.commit_message,
            content: encode_document(&document),
            sha: version.as_ref().map(VersionToken::as_str),
        };

        let response = self.client.put(self.contents_url.clone()).json(&body).send().await?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::CONFLICT => Err(Error::conflict()),
            StatusCode::UNPROCESSABLE_ENTITY => {
                // GitHub reports some sha mismatches as 422 instead of 409,
                // with the offending sha named in the message.
                let message = response.text().await.unwrap_or_default();

                if message.contains("sha") {
                    Err(Error::conflict())
                } else {
                    Err(Error::unexpected_response(StatusCode::UNPROCESSABLE_ENTITY))
                }
            }
            status => Err(Error::unexpected_response(status)),
        }
    }
}

/// It builds the contents API URL for the configured file coordinates.
fn contents_url(config: &Store) -> Result<Url, Error> {
    config
        .api_url
        .join(&format!(
            "repos/{}/{}/contents/{}",
            config.owner, config.repo, config.path
        ))
        .map_err(|_| Error::invalid_coordinates())
}

/// It serializes the document the way the stored file is formatted:
/// pretty-printed JSON, base64-encoded for the wire.
fn encode_document(document: &Document) -> String {
    let json = serde_json::to_string_pretty(document).expect("a whitelist document always serializes to JSON");

    STANDARD.encode(json)
}

/// It decodes the base64 file content returned by the contents API into a
/// document. The encoded text contains line breaks, which are stripped
/// before decoding.
fn parse_document(content: &str) -> Result<Document, Error> {
    let cleaned: String = content.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    let raw = STANDARD
        .decode(cleaned.as_bytes())
        .map_err(|e| Error::MalformedContent { source: e })?;

    serde_json::from_slice(&raw).map_err(|e| Error::MalformedDocument { source: e })
}
