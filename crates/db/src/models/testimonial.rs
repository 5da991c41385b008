//! Customer testimonial model.

use serde::Serialize;
use sqlx::FromRow;

use hauler_core::types::{DbId, Timestamp};

/// A row from the `testimonials` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Testimonial {
    pub id: DbId,
    pub name: String,
    pub text: String,
    pub rating: i16,
    pub photo_path: Option<String>,
    pub created_at: Timestamp,
}

/// Input for creating a new testimonial.
#[derive(Debug)]
pub struct CreateTestimonial {
    pub name: String,
    pub text: String,
    pub rating: i16,
    pub photo_path: Option<String>,
}
