pub mod dashboard_repo;
pub mod gallery_repo;
pub mod job_note_repo;
pub mod job_photo_repo;
pub mod quote_request_repo;
pub mod service_repo;
pub mod settings_repo;
pub mod testimonial_repo;
pub mod user_repo;

pub use dashboard_repo::DashboardRepo;
pub use gallery_repo::GalleryRepo;
pub use job_note_repo::JobNoteRepo;
pub use job_photo_repo::JobPhotoRepo;
pub use quote_request_repo::QuoteRequestRepo;
pub use service_repo::ServiceRepo;
pub use settings_repo::SettingsRepo;
pub use testimonial_repo::TestimonialRepo;
pub use user_repo::UserRepo;
