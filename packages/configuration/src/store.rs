//! Remote content store configuration.
use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration for the remote content store holding the whitelist
/// document: a file in a GitHub repository, accessed through the contents
/// API.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Store {
    /// Base URL of the contents API. Override it for GitHub Enterprise
    /// deployments.
    #[serde(default = "Store::default_api_url")]
    pub api_url: Url,
    /// Access token used to authenticate against the contents API. Reads
    /// from a public repository work without it; writes do not.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// The account owning the repository the document lives in.
    #[serde(default)]
    pub owner: String,
    /// The repository the document lives in.
    #[serde(default)]
    pub repo: String,
    /// Path of the document file within the repository.
    #[serde(default = "Store::default_path")]
    pub path: String,
    /// Commit message used for every document update.
    #[serde(default = "Store::default_commit_message")]
    pub commit_message: String,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            api_url: Self::default_api_url(),
            token: None,
            owner: String::new(),
            repo: String::new(),
            path: Self::default_path(),
            commit_message: Self::default_commit_message(),
        }
    }
}

impl Store {
    fn default_api_url() -> Url {
        Url::parse("https://api.github.com").expect("hardcoded API URL should be valid")
    }

    fn default_path() -> String {
        String::from("whitelist.json")
    }

    fn default_commit_message() -> String {
        String::from("Update whitelist")
    }
}
