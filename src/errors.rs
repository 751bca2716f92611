use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing required fields")]
    Validation { missing: Vec<&'static str> },

    /// Internal fault while handling a submission. The detail is logged,
    /// the client only ever sees the generic message.
    #[error("Failed to submit contact form")]
    Server(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation { missing } => {
                tracing::info!(missing = ?missing, "rejected contact submission");
                StatusCode::BAD_REQUEST
            }
            AppError::Server(detail) => {
                tracing::error!(error = %detail, "error processing contact form");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
