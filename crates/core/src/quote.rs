//! Quote request status state machine and intake validation rules.
//!
//! A quote request moves forward along `pending -> confirmed -> completed`.
//! The transition table below is closed: anything not listed is rejected
//! with [`CoreError::InvalidTransition`], so status can never regress.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Minimum number of intake photos required at submission.
pub const MIN_INTAKE_PHOTOS: usize = 1;

/// Maximum number of intake photos accepted at submission.
pub const MAX_INTAKE_PHOTOS: usize = 3;

/// Lifecycle status of a quote request.
///
/// Stored in Postgres as the `quote_status` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "quote_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    Pending,
    Confirmed,
    Completed,
}

/// The only allowed forward transitions.
const TRANSITIONS: &[(QuoteStatus, QuoteStatus)] = &[
    (QuoteStatus::Pending, QuoteStatus::Confirmed),
    (QuoteStatus::Confirmed, QuoteStatus::Completed),
];

impl QuoteStatus {
    /// Lowercase wire/storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            QuoteStatus::Pending => "pending",
            QuoteStatus::Confirmed => "confirmed",
            QuoteStatus::Completed => "completed",
        }
    }

    /// Whether `self -> target` appears in the transition table.
    pub fn can_transition_to(self, target: QuoteStatus) -> bool {
        TRANSITIONS.contains(&(self, target))
    }

    /// Validate a requested transition, returning the target on success.
    pub fn transition_to(self, target: QuoteStatus) -> Result<QuoteStatus, CoreError> {
        if self.can_transition_to(target) {
            Ok(target)
        } else {
            Err(CoreError::InvalidTransition {
                from: self.as_str(),
                to: target.as_str(),
            })
        }
    }
}

impl std::fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for QuoteStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(QuoteStatus::Pending),
            "confirmed" => Ok(QuoteStatus::Confirmed),
            "completed" => Ok(QuoteStatus::Completed),
            other => Err(CoreError::Validation(format!(
                "Unknown quote status '{other}'"
            ))),
        }
    }
}

/// Validate that a required intake text field is non-empty after trimming.
pub fn validate_required_field(field: &'static str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} is required"));
    }
    Ok(())
}

/// Validate the intake photo count against the [1, 3] bounds.
pub fn validate_photo_count(count: usize) -> Result<(), String> {
    if count < MIN_INTAKE_PHOTOS {
        return Err(format!(
            "At least {MIN_INTAKE_PHOTOS} photo of the items to be removed is required"
        ));
    }
    if count > MAX_INTAKE_PHOTOS {
        return Err(format!("At most {MAX_INTAKE_PHOTOS} photos are accepted"));
    }
    Ok(())
}
