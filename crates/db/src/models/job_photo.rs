//! Completion photo model. Rows are immutable once created.

use serde::Serialize;
use sqlx::FromRow;

use hauler_core::types::{DbId, Timestamp};

/// A row from the `job_photos` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct JobPhoto {
    pub id: DbId,
    pub quote_request_id: DbId,
    pub photo_path: String,
    pub created_at: Timestamp,
}
