use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference counted, the config is
/// behind `Arc`). Handlers only read from it.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, the one data session shared by all requests.
    pub pool: flickfinder_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
