//! Newsletter (priority-access list) submission.
//!
//! The endpoint is a spreadsheet-backed web app that accepts a
//! form-urlencoded POST. The original transport deliberately suppressed the
//! response body, so the contract here is the same: success is assumed once
//! the request completes without a transport-level error, and the caller
//! only ever sees one of two fixed messages.

use chrono::Utc;
use tracing::warn;

/// Literal message shown on a successful submission.
pub const SUCCESS_MESSAGE: &str = "UPLINK_ESTABLISHED_DATA_SECURE";
/// Literal message shown on a failed submission.
pub const FAILURE_MESSAGE: &str = "CONNECTION_FAILED_RETRY";

/// Outcome of a newsletter submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub success: bool,
    pub message: String,
}

impl SubmitOutcome {
    fn success() -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    fn failure() -> Self {
        Self {
            success: false,
            message: FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Posts an email address and timestamp to the newsletter endpoint.
///
/// Best-effort, no retry. A missing endpoint or transport-level error
/// yields the fixed failure outcome; anything that reaches the wire and
/// comes back counts as success (the response body is not interpreted).
pub async fn submit_email(
    http: &reqwest::Client,
    endpoint: Option<&str>,
    email: &str,
) -> SubmitOutcome {
    let Some(endpoint) = endpoint else {
        warn!("newsletter endpoint not configured");
        return SubmitOutcome::failure();
    };

    let params = [
        ("email", email.to_string()),
        ("timestamp", Utc::now().to_rfc3339()),
    ];

    match http.post(endpoint).form(&params).send().await {
        Ok(_) => SubmitOutcome::success(),
        Err(e) => {
            warn!("newsletter submission failed: {e:#}");
            SubmitOutcome::failure()
        }
    }
}
