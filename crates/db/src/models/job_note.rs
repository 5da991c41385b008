//! Completion note model. Rows are immutable once created.

use serde::Serialize;
use sqlx::FromRow;

use hauler_core::types::{DbId, Timestamp};

/// A row from the `job_notes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct JobNote {
    pub id: DbId,
    pub quote_request_id: DbId,
    pub notes: String,
    pub created_at: Timestamp,
}
