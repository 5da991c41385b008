pub mod auth;
pub mod dashboard;
pub mod gallery;
pub mod health;
pub mod quotes;
pub mod services;
pub mod settings;
pub mod testimonials;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                    owner login (public)
///
/// /quotes                        public intake (POST, multipart)
/// /quotes/{id}/confirm           pending -> confirmed (PATCH, auth)
/// /quotes/{id}/complete          confirmed -> completed (PATCH, auth)
/// /quotes/{id}                   delete from any status (DELETE, auth)
/// /quotes/{id}/completion        attach note/photos (POST, multipart, auth)
///
/// /dashboard                     full snapshot (GET, auth)
///
/// /services                      public list, create (auth)
/// /services/{id}                 delete (auth)
/// /gallery                       public list, create (multipart, auth)
/// /gallery/{id}                  delete (auth)
/// /testimonials                  public list, create (multipart, auth)
/// /testimonials/{id}             delete (auth)
/// /settings                      public read, upsert (PUT, auth)
/// /settings/assets               upload site asset (POST, multipart, auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/quotes", quotes::router())
        .nest("/dashboard", dashboard::router())
        .nest("/services", services::router())
        .nest("/gallery", gallery::router())
        .nest("/testimonials", testimonials::router())
        .nest("/settings", settings::router())
}
