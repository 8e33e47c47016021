//! Shared application state for the web server.

use std::sync::Arc;

use tokio::sync::RwLock;

use paperlens_client::BackendClient;
use paperlens_common::error::Result;
use paperlens_view::PageState;

use crate::config::Config;

/// State injected into every handler. The page view-model is the only
/// shared mutable resource; the lock is never held across a backend call.
pub struct AppState {
    pub page: RwLock<PageState>,
    pub client: BackendClient,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            page: RwLock::new(PageState::default()),
            client: BackendClient::new(&config.backend_url, config.http_timeout)?,
        })
    }
}

pub type SharedState = Arc<AppState>;
