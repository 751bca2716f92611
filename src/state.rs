use crate::config::AppConfig;
use crate::services::intake::SubmissionSink;

pub struct AppState {
    pub config: AppConfig,
    pub intake: Box<dyn SubmissionSink>,
}
