//! Handlers for the `/testimonials` content collection.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;

use hauler_core::error::CoreError;
use hauler_core::types::DbId;
use hauler_db::models::testimonial::{CreateTestimonial, Testimonial};
use hauler_db::repositories::TestimonialRepo;
use hauler_storage::{buckets, object_name};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/testimonials
///
/// Public list, newest first.
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Testimonial>>>> {
    let testimonials = TestimonialRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: testimonials }))
}

/// POST /api/v1/testimonials
///
/// Create a testimonial from a multipart form: required `name` and `text`
/// fields, an optional `rating` (1-5, default 5), and an optional `photo`
/// file, uploaded before the row is written.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<Testimonial>>)> {
    let mut name = String::new();
    let mut text = String::new();
    let mut rating: i16 = 5;
    let mut photo: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "name" => {
                name = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?
            }
            "text" => {
                text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?
            }
            "rating" => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                rating = raw
                    .trim()
                    .parse()
                    .map_err(|_| AppError::BadRequest(format!("Invalid rating '{raw}'")))?;
            }
            "photo" => {
                let filename = field.file_name().unwrap_or("photo.jpg").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                photo = Some((filename, data.to_vec()));
            }
            _ => {}
        }
    }

    if name.trim().is_empty() || text.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Testimonial name and text are required".to_string(),
        ));
    }
    if !(1..=5).contains(&rating) {
        return Err(AppError::BadRequest(
            "Rating must be between 1 and 5".to_string(),
        ));
    }

    let photo_path = match photo {
        Some((filename, bytes)) => {
            let object = object_name(&filename);
            state
                .blob_store
                .upload(buckets::TESTIMONIALS, &object, &bytes)
                .await?;
            Some(object)
        }
        None => None,
    };

    let testimonial = TestimonialRepo::create(
        &state.pool,
        &CreateTestimonial {
            name,
            text,
            rating,
            photo_path,
        },
    )
    .await?;

    tracing::info!(
        user_id = auth.user_id,
        testimonial_id = testimonial.id,
        "Testimonial created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: testimonial })))
}

/// DELETE /api/v1/testimonials/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TestimonialRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }));
    }

    tracing::info!(
        user_id = auth.user_id,
        testimonial_id = id,
        "Testimonial deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}
