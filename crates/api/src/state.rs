use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted and the config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: folio_db::DbPool,
    /// Server configuration (JWT secret, files service URL, ...).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Base URL of the external files service, for resolving asset URLs.
    pub fn files_url(&self) -> &str {
        &self.config.files_api_url
    }
}
