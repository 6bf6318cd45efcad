use std::net::SocketAddr;

use reqwest::Response;
use serde_json::json;

/// API client for the whitelist endpoint.
pub struct Client {
    bind_address: SocketAddr,
    base_path: String,
}

impl Client {
    /// A client talking to the versioned endpoint.
    pub fn new(bind_address: SocketAddr) -> Self {
        Self {
            bind_address,
            base_path: "/api/v1".to_string(),
        }
    }

    /// A client talking to the unversioned endpoint kept for the deployed
    /// bot and launcher builds.
    pub fn unversioned(bind_address: SocketAddr) -> Self {
        Self {
            bind_address,
            base_path: "/api".to_string(),
        }
    }

    // Read operations

    pub async fn check(&self, hwid: &str) -> Response {
        self.query(&[("action", "check"), ("hwid", hwid)]).await
    }

    pub async fn get_hwid(&self, discord_id: &str) -> Response {
        self.query(&[("action", "get_hwid"), ("discord_id", discord_id)]).await
    }

    pub async fn hwid_exists(&self, hwid: &str) -> Response {
        self.query(&[("action", "hwid_exists"), ("hwid", hwid)]).await
    }

    pub async fn query(&self, params: &[(&str, &str)]) -> Response {
        reqwest::Client::new()
            .get(self.whitelist_url())
            .query(params)
            .send()
            .await
            .unwrap()
    }

    // Mutations

    pub async fn add(&self, discord_id: &str, hwid: &str) -> Response {
        self.post_json(json!({ "action": "add", "discord_id": discord_id, "hwid": hwid }))
            .await
    }

    pub async fn reset(&self, discord_id: &str, new_hwid: &str) -> Response {
        self.post_json(json!({ "action": "reset", "discord_id": discord_id, "new_hwid": new_hwid }))
            .await
    }

    pub async fn remove(&self, discord_id: &str) -> Response {
        self.post_json(json!({ "action": "remove", "discord_id": discord_id })).await
    }

    pub async fn post_json(&self, body: serde_json::Value) -> Response {
        reqwest::Client::new()
            .post(self.whitelist_url())
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    /// It sends a raw body, used for the double-encoded and malformed body
    /// tests.
    pub async fn post_body(&self, body: String) -> Response {
        reqwest::Client::new()
            .post(self.whitelist_url())
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap()
    }

    // Other requests

    pub async fn put_empty(&self) -> Response {
        reqwest::Client::new().put(self.whitelist_url()).send().await.unwrap()
    }

    /// A CORS preflight request, the way a browser sends it before a
    /// cross-origin POST.
    pub async fn preflight(&self) -> Response {
        reqwest::Client::new()
            .request(reqwest::Method::OPTIONS, self.whitelist_url())
            .header("origin", "https://panel.example.com")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type")
            .send()
            .await
            .unwrap()
    }

    pub async fn health_check(&self) -> Response {
        let url = format!("http://{}/api/health_check", self.bind_address);

        reqwest::Client::new().get(url).send().await.unwrap()
    }

    fn whitelist_url(&self) -> String {
        format!("http://{}{}/whitelist", self.bind_address, self.base_path)
    }
}
