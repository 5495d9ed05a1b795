//! Per-invocation application context.

use std::path::PathBuf;

use anyhow::Result;

use ekhoes::{BaseUrl, RemoteClient, TokenStore};

use crate::config::Config;

/// Everything a command handler needs, built once per invocation and passed
/// by reference. There is no global state; the token lives in the store and
/// is loaded per request.
#[derive(Debug, Clone)]
pub struct App {
    pub store: TokenStore,
    pub client: RemoteClient,
}

impl App {
    /// Build the context from the loaded config. The token store shares the
    /// config directory, so token and config sit side by side.
    pub fn new(config: &Config, dir: impl Into<PathBuf>) -> Result<Self> {
        let base = BaseUrl::new(&config.url)?;
        let store = TokenStore::open(dir);
        let client = RemoteClient::new(base, store.clone());
        Ok(Self { store, client })
    }
}
