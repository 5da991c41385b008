//! Business settings singleton model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use hauler_core::types::Timestamp;

/// The single row of the `settings` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Settings {
    pub id: i16,
    pub business_name: Option<String>,
    pub phone: Option<String>,
    pub hours: Option<String>,
    pub service_area: Option<String>,
    pub logo_path: Option<String>,
    pub about_title: Option<String>,
    pub about_text: Option<String>,
    pub about_photo_1: Option<String>,
    pub about_photo_2: Option<String>,
    pub promo_text: Option<String>,
    pub promo_enabled: bool,
    pub updated_at: Timestamp,
}

/// DTO for the settings upsert. Absent fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSettings {
    pub business_name: Option<String>,
    pub phone: Option<String>,
    pub hours: Option<String>,
    pub service_area: Option<String>,
    pub logo_path: Option<String>,
    pub about_title: Option<String>,
    pub about_text: Option<String>,
    pub about_photo_1: Option<String>,
    pub about_photo_2: Option<String>,
    pub promo_text: Option<String>,
    pub promo_enabled: Option<bool>,
}
