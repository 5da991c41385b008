//! Repository for the `testimonials` table.

use sqlx::PgPool;

use hauler_core::types::DbId;

use crate::models::testimonial::{CreateTestimonial, Testimonial};

const COLUMNS: &str = "id, name, text, rating, photo_path, created_at";

pub struct TestimonialRepo;

impl TestimonialRepo {
    /// Create a new testimonial.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials (name, text, rating, photo_path)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&input.name)
            .bind(&input.text)
            .bind(input.rating)
            .bind(&input.photo_path)
            .fetch_one(pool)
            .await
    }

    /// List testimonials, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM testimonials
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .fetch_all(pool)
            .await
    }

    /// Delete a testimonial by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
