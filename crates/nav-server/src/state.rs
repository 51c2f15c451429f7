use std::sync::Arc;

use nav_store::{NavStore, StoreResult};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};

/// Shared handler state.
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<NavStore>,
    pub cookie_secure: bool,
}

impl AppState {
    pub fn new(store: NavStore) -> Self {
        Self {
            store: Arc::new(store),
            cookie_secure: false,
        }
    }

    /// Open the dataset named by the config.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            store: Arc::new(NavStore::open_file(&config.data_path)),
            cookie_secure: config.cookie_secure,
        }
    }

    /// Run a store operation on the blocking pool.
    ///
    /// Mutations hold the store lock across a synchronous file write, so
    /// every lock acquisition, reads included, is kept off the async worker
    /// threads.
    pub async fn blocking<T, F>(&self, op: F) -> ServerResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&NavStore) -> StoreResult<T> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || op(&store))
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?
            .map_err(ServerError::from)
    }
}
