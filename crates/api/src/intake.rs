//! The public quote-intake saga.
//!
//! Intake is an ordered sequence of steps, each with a typed result:
//!
//! 1. **Validate** -- required fields and the photo-count bounds are
//!    checked before any side effect; a failure here leaves no trace.
//! 2. **Upload photos** -- each photo goes to the `quote-photos` bucket
//!    under a generated collision-resistant name. The first failed upload
//!    aborts intake before any database write (earlier uploads are left
//!    behind as orphaned blobs; accepted tradeoff).
//! 3. **Persist** -- the quote request row is inserted with status forced
//!    to `pending` and the blob names in upload order.
//! 4. **Notify** -- the owner alert goes out best-effort. The
//!    [`SmsOutcome`] is carried in the result as data; a failed send never
//!    fails intake.

use chrono::NaiveDate;
use serde::Serialize;

use hauler_core::error::CoreError;
use hauler_core::quote::{validate_photo_count, validate_required_field};
use hauler_db::models::quote_request::{CreateQuoteRequest, QuoteRequest};
use hauler_db::repositories::{QuoteRequestRepo, SettingsRepo};
use hauler_sms::SmsOutcome;
use hauler_storage::{buckets, object_name};

use crate::error::AppResult;
use crate::state::AppState;

/// One photo from the intake form.
#[derive(Debug)]
pub struct PhotoUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Parsed intake form fields.
#[derive(Debug)]
pub struct IntakeSubmission {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub description: String,
    pub requested_date: NaiveDate,
    pub photos: Vec<PhotoUpload>,
}

/// Result of a completed intake: the created quote plus the notification
/// step's outcome, surfaced for diagnostics only.
#[derive(Debug, Serialize)]
pub struct IntakeOutcome {
    pub quote: QuoteRequest,
    pub sms_sent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_error: Option<String>,
}

/// Validate the submission. Runs before any upload or insert.
fn validate(submission: &IntakeSubmission) -> Result<(), CoreError> {
    validate_required_field("Name", &submission.name)
        .and_then(|()| validate_required_field("Phone", &submission.phone))
        .and_then(|()| validate_required_field("Address", &submission.address))
        .and_then(|()| validate_required_field("Description", &submission.description))
        .and_then(|()| validate_photo_count(submission.photos.len()))
        .map_err(CoreError::Validation)
}

/// Run the intake saga.
pub async fn run(state: &AppState, submission: IntakeSubmission) -> AppResult<IntakeOutcome> {
    // Step 1: validate.
    validate(&submission)?;

    // Step 2: upload photos. Any failure aborts before the insert.
    let mut photo_names = Vec::with_capacity(submission.photos.len());
    for photo in &submission.photos {
        let name = object_name(&photo.filename);
        state
            .blob_store
            .upload(buckets::QUOTE_PHOTOS, &name, &photo.bytes)
            .await?;
        photo_names.push(name);
    }

    // Step 3: persist with status forced to pending.
    let quote = QuoteRequestRepo::create(
        &state.pool,
        &CreateQuoteRequest {
            name: submission.name,
            phone: submission.phone,
            address: submission.address,
            description: submission.description,
            requested_date: submission.requested_date,
            photos: photo_names,
        },
    )
    .await?;

    tracing::info!(
        quote_id = quote.id,
        photo_count = quote.photos.len(),
        "Quote request submitted"
    );

    // Step 4: notify, best-effort. The outcome is data, never an error.
    let notification = notify_owner(state, &quote).await;
    if !notification.sent {
        tracing::warn!(
            quote_id = quote.id,
            error = ?notification.error,
            "Owner SMS notification failed; intake still succeeded"
        );
    }

    Ok(IntakeOutcome {
        quote,
        sms_sent: notification.sent,
        sms_error: notification.error,
    })
}

/// Format and send the owner alert for a freshly created quote.
///
/// The destination falls through business settings, then the deployment
/// default, then the hardcoded fallback. A settings read failure is
/// treated like an unset settings phone -- notification trouble must not
/// surface as an intake error.
async fn notify_owner(state: &AppState, quote: &QuoteRequest) -> SmsOutcome {
    let settings_phone = match SettingsRepo::find(&state.pool).await {
        Ok(settings) => settings.and_then(|s| s.phone),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read settings for SMS destination");
            None
        }
    };

    let destination = hauler_sms::resolve_destination(
        settings_phone.as_deref(),
        state.config.sms.owner_phone.as_deref(),
    );

    let message = hauler_sms::format_quote_alert(
        &quote.name,
        &quote.phone,
        &quote.address,
        &quote.description,
        quote.requested_date,
    );

    state.sms.send(&destination, &message).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(photo_count: usize) -> IntakeSubmission {
        IntakeSubmission {
            name: "Jane Doe".to_string(),
            phone: "702-555-0101".to_string(),
            address: "1 Main St".to_string(),
            description: "two sofas".to_string(),
            requested_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            photos: (0..photo_count)
                .map(|i| PhotoUpload {
                    filename: format!("photo-{i}.jpg"),
                    bytes: vec![0u8; 4],
                })
                .collect(),
        }
    }

    #[test]
    fn validation_accepts_one_to_three_photos() {
        assert!(validate(&submission(1)).is_ok());
        assert!(validate(&submission(3)).is_ok());
    }

    #[test]
    fn validation_rejects_photo_count_out_of_bounds() {
        assert!(matches!(
            validate(&submission(0)),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            validate(&submission(4)),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn validation_rejects_blank_fields() {
        let mut s = submission(1);
        s.address = "   ".to_string();
        let err = validate(&s).unwrap_err();
        assert!(err.to_string().contains("Address"));
    }
}
