//! Service catalog entry model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use hauler_core::types::{DbId, Timestamp};

/// A row from the `services` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Service {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new service.
#[derive(Debug, Deserialize)]
pub struct CreateService {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub icon: Option<String>,
}
