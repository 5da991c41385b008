//! Handlers for the `/quotes` resource: public intake, the owner's status
//! transitions, deletion, and completion-record attachment.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;

use hauler_core::error::CoreError;
use hauler_core::quote::QuoteStatus;
use hauler_core::types::DbId;
use hauler_db::models::job_note::JobNote;
use hauler_db::models::job_photo::JobPhoto;
use hauler_db::models::quote_request::QuoteRequest;
use hauler_db::repositories::{JobNoteRepo, JobPhotoRepo, QuoteRequestRepo};
use hauler_storage::{buckets, object_name};

use crate::error::{AppError, AppResult};
use crate::intake::{self, IntakeOutcome, IntakeSubmission, PhotoUpload};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public intake
// ---------------------------------------------------------------------------

/// POST /api/v1/quotes
///
/// Public intake endpoint. Accepts a multipart form with `name`, `phone`,
/// `address`, `description`, `requested_date` (YYYY-MM-DD) text fields and
/// one to three `photos` file fields. Returns 201 with the created quote
/// and the notification outcome; the notification outcome never gates
/// success.
pub async fn submit(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<IntakeOutcome>>)> {
    let mut name = String::new();
    let mut phone = String::new();
    let mut address = String::new();
    let mut description = String::new();
    let mut requested_date_raw: Option<String> = None;
    let mut photos: Vec<PhotoUpload> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "name" => name = read_text(field).await?,
            "phone" => phone = read_text(field).await?,
            "address" => address = read_text(field).await?,
            "description" => description = read_text(field).await?,
            "requested_date" => requested_date_raw = Some(read_text(field).await?),
            "photos" => {
                let filename = field.file_name().unwrap_or("photo.jpg").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                photos.push(PhotoUpload {
                    filename,
                    bytes: data.to_vec(),
                });
            }
            _ => {} // ignore unknown fields
        }
    }

    let requested_date = match requested_date_raw.as_deref() {
        None | Some("") => {
            return Err(AppError::Core(CoreError::Validation(
                "Requested date is required".into(),
            )))
        }
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            AppError::BadRequest(format!(
                "Invalid requested_date '{raw}', expected YYYY-MM-DD"
            ))
        })?,
    };

    let outcome = intake::run(
        &state,
        IntakeSubmission {
            name,
            phone,
            address,
            description,
            requested_date,
            photos,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: outcome })))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> AppResult<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

// ---------------------------------------------------------------------------
// Status transitions
// ---------------------------------------------------------------------------

/// PATCH /api/v1/quotes/{id}/confirm
///
/// Move a pending quote to confirmed.
pub async fn confirm(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<QuoteRequest>>> {
    let quote = apply_transition(&state, &auth, id, QuoteStatus::Confirmed).await?;
    Ok(Json(DataResponse { data: quote }))
}

/// PATCH /api/v1/quotes/{id}/complete
///
/// Move a confirmed quote to completed.
pub async fn complete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<QuoteRequest>>> {
    let quote = apply_transition(&state, &auth, id, QuoteStatus::Completed).await?;
    Ok(Json(DataResponse { data: quote }))
}

/// Validate the requested transition against the state machine, then apply
/// it with a compare-and-set so a concurrent owner cannot regress status.
async fn apply_transition(
    state: &AppState,
    auth: &AuthUser,
    id: DbId,
    target: QuoteStatus,
) -> AppResult<QuoteRequest> {
    let quote = QuoteRequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "QuoteRequest",
            id,
        }))?;

    quote.status.transition_to(target)?;

    let updated = QuoteRequestRepo::transition(&state.pool, id, quote.status, target)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "Quote status changed concurrently. Reload and try again.".into(),
            ))
        })?;

    tracing::info!(
        user_id = auth.user_id,
        quote_id = id,
        from = %quote.status,
        to = %target,
        "Quote status updated"
    );

    Ok(updated)
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

/// DELETE /api/v1/quotes/{id}
///
/// Delete a quote request from any status. Job notes and photos cascade.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = QuoteRequestRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "QuoteRequest",
            id,
        }));
    }

    tracing::info!(user_id = auth.user_id, quote_id = id, "Quote request deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Completion records
// ---------------------------------------------------------------------------

/// Completion records created by one attach call.
#[derive(Debug, Serialize)]
pub struct CompletionRecords {
    pub note: Option<JobNote>,
    pub photos: Vec<JobPhoto>,
}

/// POST /api/v1/quotes/{id}/completion
///
/// Attach completion records to a job: an optional `notes` text field and
/// any number of `photos` file fields. The note is skipped when empty
/// after trimming; a photo whose upload fails is dropped from the record
/// set rather than failing the call. Calls are additive -- repeating the
/// same note creates another row.
pub async fn attach_completion(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<CompletionRecords>>)> {
    let mut notes_text = String::new();
    let mut photos: Vec<(String, Vec<u8>)> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "notes" => notes_text = read_text(field).await?,
            "photos" => {
                let filename = field.file_name().unwrap_or("photo.jpg").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                photos.push((filename, data.to_vec()));
            }
            _ => {}
        }
    }

    // The parent must exist; its status is intentionally not checked --
    // attaching to a not-yet-completed job is a workflow convention, not a
    // stored constraint.
    QuoteRequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "QuoteRequest",
            id,
        }))?;

    let mut stored_names = Vec::new();
    for (filename, bytes) in &photos {
        let name = object_name(filename);
        match state
            .blob_store
            .upload(buckets::JOB_PHOTOS, &name, bytes)
            .await
        {
            Ok(()) => stored_names.push(name),
            Err(e) => {
                tracing::warn!(
                    quote_id = id,
                    filename = %filename,
                    error = %e,
                    "Dropping completion photo that failed to upload"
                );
            }
        }
    }

    let trimmed = notes_text.trim();
    let note = if trimmed.is_empty() {
        None
    } else {
        Some(JobNoteRepo::create(&state.pool, id, trimmed).await?)
    };

    let saved_photos = JobPhotoRepo::create_many(&state.pool, id, &stored_names).await?;

    tracing::info!(
        user_id = auth.user_id,
        quote_id = id,
        note_saved = note.is_some(),
        photos_saved = saved_photos.len(),
        photos_dropped = photos.len() - saved_photos.len(),
        "Completion records attached"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CompletionRecords {
                note,
                photos: saved_photos,
            },
        }),
    ))
}
