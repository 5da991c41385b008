//! Outbound text-message client for the quote notification pipeline.
//!
//! [`SmsSender`] posts a JSON `{phone, message, key}` payload to a
//! TextBelt-compatible gateway and converts every possible failure --
//! connection errors, non-2xx statuses, unparseable bodies, gateway-level
//! rejections -- into a structured [`SmsOutcome`]. Nothing here returns
//! `Err` or panics past its own boundary: the intake path must never be
//! blocked by notification trouble.

use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Default gateway endpoint.
pub const DEFAULT_GATEWAY_URL: &str = "https://textbelt.com/text";

/// The gateway's shared free-tier API key, used when none is configured.
pub const DEFAULT_API_KEY: &str = "textbelt";

/// Last-resort destination when neither settings nor environment provide
/// an owner phone number.
pub const FALLBACK_OWNER_PHONE: &str = "7025831039";

// ---------------------------------------------------------------------------
// Outcome and wire types
// ---------------------------------------------------------------------------

/// Result of one notification attempt. Surfaced for diagnostics only;
/// callers must not let `sent == false` fail their own operation.
#[derive(Debug, Clone, Serialize)]
pub struct SmsOutcome {
    pub sent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_remaining: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SmsOutcome {
    fn failure(error: impl Into<String>) -> Self {
        SmsOutcome {
            sent: false,
            text_id: None,
            quota_remaining: None,
            error: Some(error.into()),
        }
    }
}

/// Gateway response body. Every field is defaulted so a partial payload
/// still parses; a body that is not JSON at all is handled by the caller.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct GatewayResponse {
    success: bool,
    text_id: Option<i64>,
    quota_remaining: Option<i64>,
    error: Option<String>,
}

// ---------------------------------------------------------------------------
// Message formatting and destination resolution
// ---------------------------------------------------------------------------

/// Build the fixed-shape owner alert for a new quote request.
///
/// Deliberately contains no URLs: the gateway blocks links from
/// unverified accounts.
pub fn format_quote_alert(
    name: &str,
    phone: &str,
    address: &str,
    description: &str,
    requested_date: NaiveDate,
) -> String {
    format!(
        "NEW QUOTE REQUEST\n\n\
         Customer: {name}\n\
         Phone: {phone}\n\
         Location: {address}\n\n\
         What: {description}\n\n\
         When: {when}\n\n\
         Check your dashboard for photos and details",
        when = requested_date.format("%Y-%m-%d"),
    )
}

/// Strip every non-digit character from a phone number.
pub fn normalize_destination(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Resolve the owner destination number.
///
/// Falls through configured business settings, then the deployment
/// default, then the hardcoded fallback; candidates that contain no
/// digits are skipped.
pub fn resolve_destination(
    settings_phone: Option<&str>,
    configured_default: Option<&str>,
) -> String {
    settings_phone
        .into_iter()
        .chain(configured_default)
        .chain(std::iter::once(FALLBACK_OWNER_PHONE))
        .map(normalize_destination)
        .find(|digits| !digits.is_empty())
        .unwrap_or_else(|| FALLBACK_OWNER_PHONE.to_string())
}

// ---------------------------------------------------------------------------
// SmsSender
// ---------------------------------------------------------------------------

/// Client for a TextBelt-compatible SMS gateway.
pub struct SmsSender {
    client: reqwest::Client,
    gateway_url: String,
    api_key: String,
}

impl SmsSender {
    /// Create a sender with a pre-configured HTTP client.
    pub fn new(gateway_url: String, api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            gateway_url,
            api_key,
        }
    }

    /// Send one message. Always returns an outcome, never an error.
    pub async fn send(&self, destination: &str, message: &str) -> SmsOutcome {
        let payload = serde_json::json!({
            "phone": destination,
            "message": message,
            "key": self.api_key,
        });

        let response = match self.client.post(&self.gateway_url).json(&payload).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "SMS gateway request failed");
                return SmsOutcome::failure(format!("Gateway request failed: {e}"));
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "SMS gateway returned non-success status");
            return SmsOutcome::failure(format!("Gateway returned HTTP {status}"));
        }

        let body: GatewayResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(error = %e, "Unparseable SMS gateway response");
                return SmsOutcome::failure(format!("Unrecognized gateway response: {e}"));
            }
        };

        if !body.success {
            let error = body
                .error
                .unwrap_or_else(|| "SMS delivery failed".to_string());
            tracing::warn!(error = %error, "SMS gateway rejected the message");
            return SmsOutcome::failure(error);
        }

        tracing::info!(
            text_id = ?body.text_id,
            quota_remaining = ?body.quota_remaining,
            "SMS sent"
        );
        SmsOutcome {
            sent: true,
            text_id: body.text_id,
            quota_remaining: body.quota_remaining,
            error: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
