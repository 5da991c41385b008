//! Route definitions for the `/testimonials` collection.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::testimonials;
use crate::state::AppState;

/// Routes mounted at `/testimonials`.
///
/// ```text
/// GET    /      -> list (public)
/// POST   /      -> create (multipart, auth)
/// DELETE /{id}  -> delete (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(testimonials::list).post(testimonials::create))
        .route("/{id}", delete(testimonials::delete))
}
