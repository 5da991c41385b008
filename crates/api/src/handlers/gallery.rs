//! Handlers for the `/gallery` content collection.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;

use hauler_core::error::CoreError;
use hauler_core::types::DbId;
use hauler_db::models::gallery_item::GalleryItem;
use hauler_db::repositories::GalleryRepo;
use hauler_storage::{buckets, object_name};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/gallery
///
/// Public list, newest first.
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<GalleryItem>>>> {
    let items = GalleryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /api/v1/gallery
///
/// Create a gallery entry from a multipart form with a required `image`
/// file field and an optional `title` text field. The image is uploaded
/// before the row is written; an upload failure aborts the call.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<GalleryItem>>)> {
    let mut title: Option<String> = None;
    let mut image: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "title" => {
                title = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                )
            }
            "image" => {
                let filename = field.file_name().unwrap_or("image.jpg").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                image = Some((filename, data.to_vec()));
            }
            _ => {}
        }
    }

    let (filename, bytes) =
        image.ok_or_else(|| AppError::BadRequest("Missing required 'image' field".into()))?;

    let name = object_name(&filename);
    state
        .blob_store
        .upload(buckets::GALLERY, &name, &bytes)
        .await?;

    let title = title.filter(|t| !t.trim().is_empty());
    let item = GalleryRepo::create(&state.pool, title.as_deref(), &name).await?;

    tracing::info!(
        user_id = auth.user_id,
        gallery_id = item.id,
        "Gallery item created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// DELETE /api/v1/gallery/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = GalleryRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "GalleryItem",
            id,
        }));
    }

    tracing::info!(user_id = auth.user_id, gallery_id = id, "Gallery item deleted");

    Ok(StatusCode::NO_CONTENT)
}
