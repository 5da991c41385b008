//! Route definitions for the business settings singleton.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/settings`.
///
/// ```text
/// GET  /        -> get (public)
/// PUT  /        -> update (auth)
/// POST /assets  -> upload_asset (multipart, auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(settings::get).put(settings::update))
        .route("/assets", post(settings::upload_asset))
}
