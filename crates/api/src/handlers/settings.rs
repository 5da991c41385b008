//! Handlers for the business settings singleton.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use hauler_db::models::settings::{Settings, UpdateSettings};
use hauler_db::repositories::SettingsRepo;
use hauler_storage::{buckets, object_name};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/settings
///
/// Public read of the settings row; `null` until the owner saves it once.
pub async fn get(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Option<Settings>>>> {
    let settings = SettingsRepo::find(&state.pool).await?;
    Ok(Json(DataResponse { data: settings }))
}

/// PUT /api/v1/settings
///
/// Upsert the singleton row. Fields omitted from the body keep their
/// stored value; concurrent saves are last-write-wins.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateSettings>,
) -> AppResult<Json<DataResponse<Settings>>> {
    let settings = SettingsRepo::upsert(&state.pool, &input).await?;

    tracing::info!(user_id = auth.user_id, "Settings saved");

    Ok(Json(DataResponse { data: settings }))
}

/// An uploaded site asset: the stored object name and its public URL.
#[derive(Debug, Serialize)]
pub struct UploadedAsset {
    pub path: String,
    pub url: String,
}

/// POST /api/v1/settings/assets
///
/// Upload a logo or about-section photo to the `business-assets` bucket.
/// Returns the stored object name, to be referenced from a later settings
/// save, plus its public URL.
pub async fn upload_asset(
    auth: AuthUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UploadedAsset>>)> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name().unwrap_or("") == "file" {
            let filename = field.file_name().unwrap_or("asset").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            file = Some((filename, data.to_vec()));
        }
    }

    let (filename, bytes) =
        file.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    let name = object_name(&filename);
    state
        .blob_store
        .upload(buckets::BUSINESS_ASSETS, &name, &bytes)
        .await?;

    tracing::info!(user_id = auth.user_id, object = %name, "Site asset uploaded");

    let url = state.blob_store.public_url(buckets::BUSINESS_ASSETS, &name);
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UploadedAsset { path: name, url },
        }),
    ))
}
