//! Handler for the owner dashboard snapshot.

use axum::extract::State;
use axum::Json;

use hauler_db::models::dashboard::DashboardSnapshot;
use hauler_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard
///
/// One consistent snapshot of every dashboard collection: all quote
/// requests (newest first, each with its job notes and photos embedded),
/// services, gallery, testimonials, and the settings row. If any single
/// read fails the whole snapshot fails; no partial dashboard is returned.
pub async fn load_snapshot(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DashboardSnapshot>>> {
    let snapshot = DashboardRepo::load_snapshot(&state.pool).await?;
    Ok(Json(DataResponse { data: snapshot }))
}
