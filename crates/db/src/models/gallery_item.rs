//! Before/after gallery entry model.

use serde::Serialize;
use sqlx::FromRow;

use hauler_core::types::{DbId, Timestamp};

/// A row from the `gallery` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct GalleryItem {
    pub id: DbId,
    pub title: Option<String>,
    pub image_path: String,
    pub created_at: Timestamp,
}
