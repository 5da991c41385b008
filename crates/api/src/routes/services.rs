//! Route definitions for the `/services` collection.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::services;
use crate::state::AppState;

/// Routes mounted at `/services`.
///
/// ```text
/// GET    /      -> list (public)
/// POST   /      -> create (auth)
/// DELETE /{id}  -> delete (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(services::list).post(services::create))
        .route("/{id}", delete(services::delete))
}
