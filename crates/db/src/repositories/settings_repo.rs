//! Repository for the `settings` singleton.

use sqlx::PgPool;

use crate::models::settings::{Settings, UpdateSettings};

const COLUMNS: &str = "id, business_name, phone, hours, service_area, logo_path, \
    about_title, about_text, about_photo_1, about_photo_2, promo_text, promo_enabled, updated_at";

pub struct SettingsRepo;

impl SettingsRepo {
    /// Fetch the settings row, if it has ever been saved.
    pub async fn find(pool: &PgPool) -> Result<Option<Settings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings WHERE id = 1");
        sqlx::query_as::<_, Settings>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Upsert the singleton row. Fields absent from the input keep their
    /// stored value; last write wins across concurrent saves.
    pub async fn upsert(pool: &PgPool, input: &UpdateSettings) -> Result<Settings, sqlx::Error> {
        let query = format!(
            "INSERT INTO settings
                (id, business_name, phone, hours, service_area, logo_path,
                 about_title, about_text, about_photo_1, about_photo_2,
                 promo_text, promo_enabled)
             VALUES (1, $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, COALESCE($11, FALSE))
             ON CONFLICT (id) DO UPDATE SET
                business_name = COALESCE($1, settings.business_name),
                phone         = COALESCE($2, settings.phone),
                hours         = COALESCE($3, settings.hours),
                service_area  = COALESCE($4, settings.service_area),
                logo_path     = COALESCE($5, settings.logo_path),
                about_title   = COALESCE($6, settings.about_title),
                about_text    = COALESCE($7, settings.about_text),
                about_photo_1 = COALESCE($8, settings.about_photo_1),
                about_photo_2 = COALESCE($9, settings.about_photo_2),
                promo_text    = COALESCE($10, settings.promo_text),
                promo_enabled = COALESCE($11, settings.promo_enabled),
                updated_at    = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Settings>(&query)
            .bind(&input.business_name)
            .bind(&input.phone)
            .bind(&input.hours)
            .bind(&input.service_area)
            .bind(&input.logo_path)
            .bind(&input.about_title)
            .bind(&input.about_text)
            .bind(&input.about_photo_1)
            .bind(&input.about_photo_2)
            .bind(&input.promo_text)
            .bind(input.promo_enabled)
            .fetch_one(pool)
            .await
    }
}
