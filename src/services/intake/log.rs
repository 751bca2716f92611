use async_trait::async_trait;

use super::SubmissionSink;
use crate::models::AcceptedSubmission;

/// Records submissions to the operational log only. Nothing is stored.
pub struct LogSink;

#[async_trait]
impl SubmissionSink for LogSink {
    async fn record(&self, submission: &AcceptedSubmission) -> anyhow::Result<()> {
        tracing::info!(
            id = %submission.id,
            name = %submission.name,
            email = %submission.email,
            phone = ?submission.phone,
            preferred_contact = ?submission.preferred_contact,
            session_type = ?submission.session_type,
            concerns = ?submission.concerns,
            urgency = ?submission.urgency,
            source = ?submission.source,
            received_at = %submission.received_at.to_rfc3339(),
            message = %submission.message,
            "contact form submission"
        );
        Ok(())
    }
}
