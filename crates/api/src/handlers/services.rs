//! Handlers for the `/services` content collection.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use hauler_core::error::CoreError;
use hauler_core::types::DbId;
use hauler_db::models::service::{CreateService, Service};
use hauler_db::repositories::ServiceRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/services
///
/// Public list, in insertion order (oldest first).
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Service>>>> {
    let services = ServiceRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: services }))
}

/// POST /api/v1/services
///
/// Create a new service entry.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateService>,
) -> AppResult<(StatusCode, Json<DataResponse<Service>>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::BadRequest("Service title is required".to_string()));
    }

    let service = ServiceRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        service_id = service.id,
        title = %service.title,
        "Service created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: service })))
}

/// DELETE /api/v1/services/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ServiceRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }));
    }

    tracing::info!(user_id = auth.user_id, service_id = id, "Service deleted");

    Ok(StatusCode::NO_CONTENT)
}
