pub mod auth;
pub mod dashboard;
pub mod gallery;
pub mod quotes;
pub mod services;
pub mod settings;
pub mod testimonials;
