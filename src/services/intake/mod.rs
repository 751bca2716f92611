pub mod log;

use async_trait::async_trait;

use crate::models::AcceptedSubmission;

/// Where accepted consultation requests are handed off after validation.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn record(&self, submission: &AcceptedSubmission) -> anyhow::Result<()>;
}
