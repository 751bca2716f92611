use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{AcceptedSubmission, SubmissionReceipt};
use crate::services::intake::SubmissionSink;

const REQUIRED_TEXT_FIELDS: [&str; 4] = ["firstName", "lastName", "email", "message"];

/// Loose truthiness for fields of an unvalidated payload: absent, null,
/// false, zero and empty strings are all treated as not provided.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn optional_text(payload: &Value, key: &str) -> Option<String> {
    payload
        .get(key)
        .filter(|v| is_truthy(Some(*v)))
        .map(text)
}

fn required_text(payload: &Value, key: &str) -> String {
    payload.get(key).map(text).unwrap_or_default()
}

/// Names of required fields that are missing or falsy in `payload`.
pub fn missing_fields(payload: &Value) -> Vec<&'static str> {
    let mut missing: Vec<&'static str> = REQUIRED_TEXT_FIELDS
        .into_iter()
        .filter(|key| !is_truthy(payload.get(*key)))
        .collect();
    if !is_truthy(payload.get("consent")) {
        missing.push("consent");
    }
    missing
}

/// Time-prefixed so ids sort by arrival; the uuid keeps them unique within
/// the same millisecond.
pub fn generate_submission_id() -> String {
    format!(
        "sub_{}_{}",
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple()
    )
}

pub async fn accept_submission(
    sink: &dyn SubmissionSink,
    payload: &Value,
) -> Result<SubmissionReceipt, AppError> {
    let missing = missing_fields(payload);
    if !missing.is_empty() {
        return Err(AppError::Validation { missing });
    }

    let accepted = AcceptedSubmission {
        id: generate_submission_id(),
        received_at: Utc::now(),
        name: format!(
            "{} {}",
            required_text(payload, "firstName"),
            required_text(payload, "lastName")
        ),
        email: required_text(payload, "email"),
        phone: optional_text(payload, "phone"),
        preferred_contact: optional_text(payload, "preferredContact"),
        session_type: optional_text(payload, "sessionType"),
        concerns: optional_text(payload, "concerns"),
        urgency: optional_text(payload, "urgency"),
        message: required_text(payload, "message"),
        submitted_at: optional_text(payload, "submittedAt"),
        source: optional_text(payload, "source"),
    };

    sink.record(&accepted)
        .await
        .map_err(|e| AppError::Server(format!("intake sink failed: {e:#}")))?;

    Ok(SubmissionReceipt::accepted(accepted.id))
}
