use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ConsultationRequest;

pub const WEBSITE_SOURCE: &str = "website-contact-form";

pub const ACCEPTED_MESSAGE: &str = "Contact form submitted successfully";

/// Body the form posts to the contact endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[serde(flatten)]
    pub request: ConsultationRequest,
    pub submitted_at: DateTime<Utc>,
    pub source: String,
}

impl ContactSubmission {
    pub fn new(request: ConsultationRequest, source: &str) -> Self {
        Self {
            request,
            submitted_at: Utc::now(),
            source: source.to_string(),
        }
    }
}

/// A payload that passed validation on the server. Optional fields are kept
/// as the text the client sent; the endpoint does not enforce their schema.
#[derive(Debug, Clone, Serialize)]
pub struct AcceptedSubmission {
    pub id: String,
    pub received_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub preferred_contact: Option<String>,
    pub session_type: Option<String>,
    pub concerns: Option<String>,
    pub urgency: Option<String>,
    pub message: String,
    pub submitted_at: Option<String>,
    pub source: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub success: bool,
    pub message: String,
    pub id: String,
}

impl SubmissionReceipt {
    pub fn accepted(id: String) -> Self {
        Self {
            success: true,
            message: ACCEPTED_MESSAGE.to_string(),
            id,
        }
    }
}
