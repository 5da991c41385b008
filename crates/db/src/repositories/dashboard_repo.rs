//! Assembles the admin dashboard snapshot.
//!
//! The five top-level collection reads fan out concurrently; the quote ids
//! from the first then drive exactly two batched child lookups (notes,
//! photos) regardless of how many quotes exist. Any single failed read
//! fails the whole snapshot -- no partial dashboard is returned.

use std::collections::HashMap;

use sqlx::PgPool;

use hauler_core::types::DbId;

use crate::models::dashboard::{DashboardSnapshot, QuoteWithJobRecords};
use crate::models::job_note::JobNote;
use crate::models::job_photo::JobPhoto;
use crate::repositories::{
    GalleryRepo, JobNoteRepo, JobPhotoRepo, QuoteRequestRepo, ServiceRepo, SettingsRepo,
    TestimonialRepo,
};

pub struct DashboardRepo;

impl DashboardRepo {
    /// Load one consistent snapshot of all dashboard collections.
    pub async fn load_snapshot(pool: &PgPool) -> Result<DashboardSnapshot, sqlx::Error> {
        let (quotes, services, gallery, testimonials, settings) = tokio::try_join!(
            QuoteRequestRepo::list_all(pool),
            ServiceRepo::list(pool),
            GalleryRepo::list(pool),
            TestimonialRepo::list(pool),
            SettingsRepo::find(pool),
        )?;

        let quote_ids: Vec<DbId> = quotes.iter().map(|q| q.id).collect();

        let (notes, photos) = if quote_ids.is_empty() {
            (Vec::new(), Vec::new())
        } else {
            tokio::try_join!(
                JobNoteRepo::list_by_quote_ids(pool, &quote_ids),
                JobPhotoRepo::list_by_quote_ids(pool, &quote_ids),
            )?
        };

        let mut notes_by_quote: HashMap<DbId, Vec<JobNote>> = HashMap::new();
        for note in notes {
            notes_by_quote
                .entry(note.quote_request_id)
                .or_default()
                .push(note);
        }

        let mut photos_by_quote: HashMap<DbId, Vec<JobPhoto>> = HashMap::new();
        for photo in photos {
            photos_by_quote
                .entry(photo.quote_request_id)
                .or_default()
                .push(photo);
        }

        let quotes = quotes
            .into_iter()
            .map(|quote| {
                let notes = notes_by_quote.remove(&quote.id).unwrap_or_default();
                let photos = photos_by_quote.remove(&quote.id).unwrap_or_default();
                QuoteWithJobRecords {
                    quote,
                    notes,
                    photos,
                }
            })
            .collect();

        Ok(DashboardSnapshot {
            quotes,
            services,
            gallery,
            testimonials,
            settings,
        })
    }
}
