//! Repository for the `quote_requests` table.

use sqlx::PgPool;

use hauler_core::quote::QuoteStatus;
use hauler_core::types::DbId;

use crate::models::quote_request::{CreateQuoteRequest, QuoteRequest};

/// Column list for quote_requests queries.
const COLUMNS: &str =
    "id, name, phone, address, description, requested_date, photos, status, created_at";

/// Provides CRUD and status-transition operations for quote requests.
pub struct QuoteRequestRepo;

impl QuoteRequestRepo {
    /// Insert a new quote request. Status always starts at `pending`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateQuoteRequest,
    ) -> Result<QuoteRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO quote_requests
                (name, phone, address, description, requested_date, photos)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QuoteRequest>(&query)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(&input.description)
            .bind(input.requested_date)
            .bind(&input.photos)
            .fetch_one(pool)
            .await
    }

    /// Find a quote request by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<QuoteRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM quote_requests WHERE id = $1");
        sqlx::query_as::<_, QuoteRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all quote requests, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<QuoteRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM quote_requests
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, QuoteRequest>(&query)
            .fetch_all(pool)
            .await
    }

    /// Compare-and-set status transition.
    ///
    /// The update only applies while the row still holds `from`, so a
    /// concurrent transition cannot be overwritten or regressed. Returns
    /// `None` when the row is missing or no longer in the expected status.
    pub async fn transition(
        pool: &PgPool,
        id: DbId,
        from: QuoteStatus,
        to: QuoteStatus,
    ) -> Result<Option<QuoteRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE quote_requests SET status = $3
             WHERE id = $1 AND status = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QuoteRequest>(&query)
            .bind(id)
            .bind(from)
            .bind(to)
            .fetch_optional(pool)
            .await
    }

    /// Delete a quote request by ID. Child job notes/photos cascade.
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM quote_requests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
