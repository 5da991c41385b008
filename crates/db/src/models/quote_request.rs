//! Quote request model.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use hauler_core::quote::QuoteStatus;
use hauler_core::types::{DbId, Timestamp};

/// A row from the `quote_requests` table.
///
/// `photos` holds the intake photo object names in upload order.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct QuoteRequest {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub description: String,
    pub requested_date: NaiveDate,
    pub photos: Vec<String>,
    pub status: QuoteStatus,
    pub created_at: Timestamp,
}

/// Input for creating a new quote request.
///
/// Status is not part of the input: intake always persists `pending`.
#[derive(Debug)]
pub struct CreateQuoteRequest {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub description: String,
    pub requested_date: NaiveDate,
    pub photos: Vec<String>,
}
