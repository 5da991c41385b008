//! Route definitions for the owner dashboard.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// GET / -> load_snapshot (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(dashboard::load_snapshot))
}
