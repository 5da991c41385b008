//! Repository for the `job_photos` table.
//!
//! Photos are append-only: there is no update or delete path.

use sqlx::PgPool;

use hauler_core::types::DbId;

use crate::models::job_photo::JobPhoto;

const COLUMNS: &str = "id, quote_request_id, photo_path, created_at";

pub struct JobPhotoRepo;

impl JobPhotoRepo {
    /// Append a batch of completion photos for one quote request.
    ///
    /// Returns the inserted rows in input order. An empty slice inserts
    /// nothing and returns an empty vec.
    pub async fn create_many(
        pool: &PgPool,
        quote_request_id: DbId,
        photo_paths: &[String],
    ) -> Result<Vec<JobPhoto>, sqlx::Error> {
        if photo_paths.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "INSERT INTO job_photos (quote_request_id, photo_path)
             SELECT $1, UNNEST($2::text[])
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobPhoto>(&query)
            .bind(quote_request_id)
            .bind(photo_paths)
            .fetch_all(pool)
            .await
    }

    /// Batch-fetch the photos for a set of quote requests in one query.
    pub async fn list_by_quote_ids(
        pool: &PgPool,
        quote_ids: &[DbId],
    ) -> Result<Vec<JobPhoto>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM job_photos
             WHERE quote_request_id = ANY($1)
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, JobPhoto>(&query)
            .bind(quote_ids)
            .fetch_all(pool)
            .await
    }
}
