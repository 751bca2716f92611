use async_trait::async_trait;

use super::FormError;
use crate::models::{ContactSubmission, SubmissionReceipt};

#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn submit(&self, submission: &ContactSubmission) -> Result<SubmissionReceipt, FormError>;
}

/// Posts submissions as JSON to `{base_url}/api/contact`.
pub struct HttpTransport {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoint: format!("{}/api/contact", base_url.trim_end_matches('/')),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ContactTransport for HttpTransport {
    async fn submit(&self, submission: &ContactSubmission) -> Result<SubmissionReceipt, FormError> {
        let res = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|e| FormError::Transport(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(FormError::Rejected {
                status: status.as_u16(),
            });
        }

        // A 2xx without a readable receipt is not a confirmed acceptance.
        res.json::<SubmissionReceipt>()
            .await
            .map_err(|e| FormError::Transport(format!("unreadable receipt: {e}")))
    }
}
