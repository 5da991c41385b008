//! Blob storage abstraction.
//!
//! [`BlobStore`] is the provider trait the rest of the system programs
//! against: named binary objects in named buckets, plus public-URL
//! resolution for serving them. Three implementations:
//!
//! - [`S3BlobStore`] -- S3-compatible object storage (production).
//! - [`LocalBlobStore`] -- files under a root directory (development).
//! - [`MemoryBlobStore`] -- in-process map with upload accounting (tests).

pub mod local;
pub mod memory;
pub mod s3;

pub use local::LocalBlobStore;
pub use memory::MemoryBlobStore;
pub use s3::S3BlobStore;

use async_trait::async_trait;
use uuid::Uuid;

/// Bucket names, one per content kind.
pub mod buckets {
    /// Intake photos attached to a quote request.
    pub const QUOTE_PHOTOS: &str = "quote-photos";
    /// Completion photos attached to a finished job.
    pub const JOB_PHOTOS: &str = "job-photos";
    /// Before/after gallery images.
    pub const GALLERY: &str = "gallery";
    /// Customer testimonial photos.
    pub const TESTIMONIALS: &str = "testimonials";
    /// Logo and about-section imagery.
    pub const BUSINESS_ASSETS: &str = "business-assets";
}

/// Errors from blob store operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The provider rejected or failed the write.
    #[error("Upload failed: {0}")]
    Upload(String),

    /// A local filesystem operation failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Named binary object storage with public-URL resolution.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Write `bytes` to `bucket` under `name`, overwriting any existing
    /// object with that name.
    async fn upload(&self, bucket: &str, name: &str, bytes: &[u8]) -> Result<(), StorageError>;

    /// Resolve the publicly servable URL for an object.
    fn public_url(&self, bucket: &str, name: &str) -> String;
}

/// Generate a collision-resistant object name, keeping the original
/// extension when it looks sane (short, alphanumeric).
pub fn object_name(original_filename: &str) -> String {
    let id = Uuid::new_v4();
    match original_filename.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty()
                && !ext.is_empty()
                && ext.len() <= 8
                && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            format!("{id}.{}", ext.to_ascii_lowercase())
        }
        _ => id.to_string(),
    }
}

/// Join a base URL with bucket and object name.
pub(crate) fn join_public_url(base: &str, bucket: &str, name: &str) -> String {
    format!("{}/{bucket}/{name}", base.trim_end_matches('/'))
}
