use std::sync::Arc;

use hauler_sms::SmsSender;
use hauler_storage::BlobStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: hauler_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Blob storage provider (intake photos, completion photos, site assets).
    pub blob_store: Arc<dyn BlobStore>,
    /// Outbound SMS gateway client.
    pub sms: Arc<SmsSender>,
}
