//! Repository for the `job_notes` table.
//!
//! Notes are append-only: there is no update or delete path.

use sqlx::PgPool;

use hauler_core::types::DbId;

use crate::models::job_note::JobNote;

const COLUMNS: &str = "id, quote_request_id, notes, created_at";

pub struct JobNoteRepo;

impl JobNoteRepo {
    /// Append a note to a quote request.
    pub async fn create(
        pool: &PgPool,
        quote_request_id: DbId,
        notes: &str,
    ) -> Result<JobNote, sqlx::Error> {
        let query = format!(
            "INSERT INTO job_notes (quote_request_id, notes)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobNote>(&query)
            .bind(quote_request_id)
            .bind(notes)
            .fetch_one(pool)
            .await
    }

    /// Batch-fetch the notes for a set of quote requests in one query.
    pub async fn list_by_quote_ids(
        pool: &PgPool,
        quote_ids: &[DbId],
    ) -> Result<Vec<JobNote>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM job_notes
             WHERE quote_request_id = ANY($1)
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, JobNote>(&query)
            .bind(quote_ids)
            .fetch_all(pool)
            .await
    }
}
