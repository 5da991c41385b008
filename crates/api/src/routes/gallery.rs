//! Route definitions for the `/gallery` collection.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::gallery;
use crate::state::AppState;

/// Routes mounted at `/gallery`.
///
/// ```text
/// GET    /      -> list (public)
/// POST   /      -> create (multipart, auth)
/// DELETE /{id}  -> delete (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(gallery::list).post(gallery::create))
        .route("/{id}", delete(gallery::delete))
}
