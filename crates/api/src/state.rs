use std::sync::Arc;

use crate::config::ServerConfig;
use crate::favorites::FavoritesLinker;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once in `main` and handed to the router; cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: holonet_db::DbPool,
    /// Server configuration (JWT settings, login gate credentials).
    pub config: Arc<ServerConfig>,
    /// Favorites linker carrying the configured cascade/ownership policy.
    pub favorites: FavoritesLinker,
}

impl AppState {
    pub fn new(pool: holonet_db::DbPool, config: ServerConfig) -> Self {
        let favorites = FavoritesLinker::new(config.favorites);
        Self {
            pool,
            config: Arc::new(config),
            favorites,
        }
    }
}
