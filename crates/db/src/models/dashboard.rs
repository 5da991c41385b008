//! Aggregated dashboard snapshot types.

use serde::Serialize;

use crate::models::gallery_item::GalleryItem;
use crate::models::job_note::JobNote;
use crate::models::job_photo::JobPhoto;
use crate::models::quote_request::QuoteRequest;
use crate::models::service::Service;
use crate::models::settings::Settings;
use crate::models::testimonial::Testimonial;

/// A quote request with its completion records embedded.
#[derive(Debug, Serialize)]
pub struct QuoteWithJobRecords {
    #[serde(flatten)]
    pub quote: QuoteRequest,
    pub notes: Vec<JobNote>,
    pub photos: Vec<JobPhoto>,
}

/// One consistent read of everything the admin dashboard displays.
#[derive(Debug, Serialize)]
pub struct DashboardSnapshot {
    pub quotes: Vec<QuoteWithJobRecords>,
    pub services: Vec<Service>,
    pub gallery: Vec<GalleryItem>,
    pub testimonials: Vec<Testimonial>,
    pub settings: Option<Settings>,
}
