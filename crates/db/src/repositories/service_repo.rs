//! Repository for the `services` table.

use sqlx::PgPool;

use hauler_core::types::DbId;

use crate::models::service::{CreateService, Service};

const COLUMNS: &str = "id, title, description, icon, created_at";

pub struct ServiceRepo;

impl ServiceRepo {
    /// Create a new service entry.
    pub async fn create(pool: &PgPool, input: &CreateService) -> Result<Service, sqlx::Error> {
        let query = format!(
            "INSERT INTO services (title, description, icon)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon)
            .fetch_one(pool)
            .await
    }

    /// List services in insertion order (oldest first).
    pub async fn list(pool: &PgPool) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM services
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Service>(&query).fetch_all(pool).await
    }

    /// Delete a service by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
