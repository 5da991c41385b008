//! Repository for the `gallery` table.

use sqlx::PgPool;

use hauler_core::types::DbId;

use crate::models::gallery_item::GalleryItem;

const COLUMNS: &str = "id, title, image_path, created_at";

pub struct GalleryRepo;

impl GalleryRepo {
    /// Create a new gallery entry for an already-uploaded image.
    pub async fn create(
        pool: &PgPool,
        title: Option<&str>,
        image_path: &str,
    ) -> Result<GalleryItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO gallery (title, image_path)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(title)
            .bind(image_path)
            .fetch_one(pool)
            .await
    }

    /// List gallery entries, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<GalleryItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM gallery
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .fetch_all(pool)
            .await
    }

    /// Delete a gallery entry by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gallery WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
