use std::net::SocketAddr;
use std::sync::Arc;

use hwid_gate::core::document::{DiscordId, Document, Hwid};
use hwid_gate::core::Whitelist;
use hwid_gate::servers::apis::server::{ApiServer, Launcher, Running, Stopped};
use hwid_gate_configuration::{Configuration, HttpApi};

use crate::common::store::InMemoryStore;

pub struct Environment<S> {
    pub config: Arc<HttpApi>,
    pub store: Arc<InMemoryStore>,
    pub whitelist: Arc<Whitelist>,
    pub server: ApiServer<S>,
}

impl<S> Environment<S> {
    /// It preloads whitelist entries into the backing store.
    pub async fn seed(&self, entries: &[(&str, &str)]) {
        let mut document = Document::default();

        for (discord_id, hwid) in entries {
            document.bind(DiscordId::new(discord_id), Hwid::new(hwid));
        }

        self.store.seed(document).await;
    }
}

impl Environment<Stopped> {
    pub fn new(configuration: &Arc<Configuration>) -> Self {
        let store = Arc::new(InMemoryStore::default());

        let whitelist = Arc::new(Whitelist::new(store.clone()));

        let config = Arc::new(configuration.http_api.clone());

        let server = ApiServer::new(Launcher::new(config.bind_address, config.cors_enabled));

        Self {
            config,
            store,
            whitelist,
            server,
        }
    }

    pub async fn start(self) -> Environment<Running> {
        Environment {
            config: self.config,
            store: self.store,
            whitelist: self.whitelist.clone(),
            server: self.server.start(self.whitelist).await.unwrap(),
        }
    }
}

impl Environment<Running> {
    pub async fn new(configuration: &Arc<Configuration>) -> Self {
        Environment::<Stopped>::new(configuration).start().await
    }

    pub async fn stop(self) -> Environment<Stopped> {
        Environment {
            config: self.config,
            store: self.store,
            whitelist: self.whitelist,
            server: self.server.stop().await.unwrap(),
        }
    }

    pub fn bind_address(&self) -> SocketAddr {
        self.server.state.binding
    }
}
