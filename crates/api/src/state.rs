use std::sync::Arc;

use crate::config::ServerConfig;
use crate::storage::ObjectStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: nameplate_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Local object store for uploaded nameplate images. `None` when storage
    /// is not configured.
    pub object_store: Option<Arc<ObjectStore>>,
}
