use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::SubmissionReceipt;
use crate::services::submission;
use crate::state::AppState;

// POST /api/contact
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SubmissionReceipt>, AppError> {
    // An unreadable body is a processing fault, not a missing-field rejection.
    let payload: Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::Server(format!("invalid JSON body: {e}")))?;

    let receipt = submission::accept_submission(state.intake.as_ref(), &payload).await?;
    tracing::info!(id = %receipt.id, "accepted contact submission");

    Ok(Json(receipt))
}

// GET /api/contact
pub async fn contact_probe() -> Json<Value> {
    Json(serde_json::json!({ "message": "Contact API endpoint" }))
}
