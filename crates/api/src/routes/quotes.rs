//! Route definitions for the `/quotes` resource.

use axum::routing::{delete, patch, post};
use axum::Router;

use crate::handlers::quotes;
use crate::state::AppState;

/// Routes mounted at `/quotes`.
///
/// ```text
/// POST   /                 -> submit (public intake, multipart)
/// PATCH  /{id}/confirm     -> confirm
/// PATCH  /{id}/complete    -> complete
/// DELETE /{id}             -> delete
/// POST   /{id}/completion  -> attach_completion (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(quotes::submit))
        .route("/{id}", delete(quotes::delete))
        .route("/{id}/confirm", patch(quotes::confirm))
        .route("/{id}/complete", patch(quotes::complete))
        .route("/{id}/completion", post(quotes::attach_completion))
}
